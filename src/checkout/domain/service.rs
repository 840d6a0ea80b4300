use std::rc::Rc;
use chrono::Utc;
use tracing::warn;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::{ALREADY_ISSUED, CheckoutService, INVALID_BOOK_OR_USER, NOT_BORROWED};
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::{BookStatus, CheckoutStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::users::domain::{Borrower, UserService};
use crate::users::domain::model::UserEntity;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    user_service: Box<dyn UserService>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Rc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, user_service: Box<dyn UserService>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Rc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            user_service,
            catalog_service,
            events_publisher,
        }
    }

    fn resolve(&self, book_id: &str, user_id: &str) -> LibraryResult<(BookEntity, UserEntity)> {
        let book = self.catalog_service.find_book_by_id(book_id);
        let user = self.user_service.find_user_by_id(user_id);
        match (book, user) {
            (Some(book), Some(user)) => Ok((book, user)),
            _ => {
                warn!(book_id, user_id, "unresolved book or user");
                Err(LibraryError::not_found(INVALID_BOOK_OR_USER))
            }
        }
    }

    // Stores the book and then the user. The book gets its previous status back
    // when the user cannot be stored, so it never ends up issued without a holder.
    fn save(&self, book: &BookEntity, previous: BookStatus, user: &UserEntity) -> LibraryResult<(BookEntity, UserEntity)> {
        let stored_book = self.catalog_service.update_book(book)?;
        match self.user_service.update_user(user) {
            Ok(stored_user) => Ok((stored_book, stored_user)),
            Err(err) => {
                let mut restored = stored_book;
                restored.book_status = previous;
                if let Err(restore_err) = self.catalog_service.update_book(&restored) {
                    warn!(book_id = restored.book_id.as_str(), error = %restore_err, "failed to restore book");
                }
                Err(err)
            }
        }
    }

    fn publish(&self, name: &str, checkout: &CheckoutDto) -> LibraryResult<()> {
        self.events_publisher.publish(&DomainEvent::updated(
            name, "checkout", checkout.checkout_id.as_str(), &branch_metadata(&self.branch_id), checkout)?)
    }
}

impl CheckoutService for CheckoutServiceImpl {
    fn issue(&self, book_id: &str, user_id: &str) -> LibraryResult<CheckoutDto> {
        let (mut book, mut user) = self.resolve(book_id, user_id)?;
        if !book.is_available() {
            warn!(book_id, user_id, "book is already issued");
            return Err(LibraryError::validation(ALREADY_ISSUED, Some(book.status().to_string())));
        }
        let previous = book.status();
        book.book_status = BookStatus::Issued;
        book.updated_at = Utc::now().naive_utc();
        user.borrow_book(book.id().as_str());
        let (book, user) = self.save(&book, previous, &user)?;
        let checkout = CheckoutDto::new(self.branch_id.as_str(), CheckoutStatus::CheckedOut, book, user);
        self.publish("book_issued", &checkout)?;
        Ok(checkout)
    }

    fn returned(&self, book_id: &str, user_id: &str) -> LibraryResult<CheckoutDto> {
        let (mut book, mut user) = self.resolve(book_id, user_id)?;
        if !user.has_borrowed(book.id().as_str()) {
            warn!(book_id, user_id, "book is not borrowed by user");
            return Err(LibraryError::validation(NOT_BORROWED, Some(book.status().to_string())));
        }
        let previous = book.status();
        book.book_status = BookStatus::Available;
        book.updated_at = Utc::now().naive_utc();
        user.return_book(book.id().as_str());
        let (book, user) = self.save(&book, previous, &user)?;
        let checkout = CheckoutDto::new(self.branch_id.as_str(), CheckoutStatus::Returned, book, user);
        self.publish("book_returned", &checkout)?;
        Ok(checkout)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::domain::{ALREADY_ISSUED, CheckoutService, INVALID_BOOK_OR_USER, NOT_BORROWED};
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::checkout::factory::create_checkout_service;
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::events::DomainEventType;
    use crate::core::library::{BookStatus, CheckoutStatus, LibraryError, LibraryResult};
    use crate::core::repository::RepositoryStore;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::users::domain::UserService;
    use crate::users::domain::model::UserEntity;
    use crate::users::factory::create_user_service;

    struct Fixture {
        publisher: Rc<MemoryPublisher>,
        catalog_svc: Box<dyn CatalogService>,
        user_svc: Box<dyn UserService>,
        checkout_svc: Box<dyn CheckoutService>,
    }

    fn fixture() -> Fixture {
        let config = Configuration::new("test");
        let publisher = Rc::new(MemoryPublisher::default());
        let store = RepositoryStore::with_publisher(publisher.clone());
        Fixture {
            publisher,
            catalog_svc: create_catalog_service(&config, &store),
            user_svc: create_user_service(&config, &store),
            checkout_svc: create_checkout_service(&config, &store),
        }
    }

    // lends the lookups of a real user service but refuses to store any change
    struct ReadOnlyUsers(Box<dyn UserService>);

    impl UserService for ReadOnlyUsers {
        fn add_user(&self, user: &UserEntity) -> LibraryResult<UserEntity> {
            self.0.add_user(user)
        }

        fn update_user(&self, _user: &UserEntity) -> LibraryResult<UserEntity> {
            Err(LibraryError::runtime("user table is read only", None))
        }

        fn find_user_by_id(&self, id: &str) -> Option<UserEntity> {
            self.0.find_user_by_id(id)
        }

        fn list_users(&self) -> Vec<UserEntity> {
            self.0.list_users()
        }
    }

    // a book is issued iff exactly one user's borrowed list holds it
    fn assert_consistent(f: &Fixture) {
        let users = f.user_svc.list_users();
        for book in f.catalog_svc.list_books() {
            let holders = users.iter()
                .map(|u| u.borrowed_books.iter().filter(|id| **id == book.id()).count())
                .sum::<usize>();
            match book.book_status {
                BookStatus::Issued => assert_eq!(1, holders, "{}", book),
                BookStatus::Available => assert_eq!(0, holders, "{}", book),
            }
        }
    }

    #[test]
    fn test_should_issue_and_return() {
        let f = fixture();
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");

        let issued = f.checkout_svc.issue("B1", "U1").expect("should issue");
        assert_eq!(CheckoutStatus::CheckedOut, issued.checkout_status);
        assert_eq!("B1 - Dune by Herbert [Issued]", issued.book.to_string());
        assert_eq!("U1 - Alice (Borrowed: 1)", issued.user.to_string());
        assert_eq!(issued.book, f.catalog_svc.find_book_by_id("B1").expect("should find book"));
        assert_consistent(&f);

        let returned = f.checkout_svc.returned("B1", "U1").expect("should return");
        assert_eq!(CheckoutStatus::Returned, returned.checkout_status);
        assert_eq!("B1 - Dune by Herbert [Available]", returned.book.to_string());
        assert_eq!("U1 - Alice (Borrowed: 0)", returned.user.to_string());
        assert_consistent(&f);

        let names: Vec<String> = f.publisher.events().iter().map(|e| e.name.to_string()).collect();
        assert_eq!(vec!["book_added", "user_added", "book_issued", "book_returned"], names);
        assert_eq!(DomainEventType::Updated, f.publisher.events()[3].kind);
    }

    #[test]
    fn test_should_resolve_ids_ignoring_case() {
        let f = fixture();
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");
        let _ = f.checkout_svc.issue("b1", "u1").expect("should issue");
        let _ = f.checkout_svc.returned("B1", "u1").expect("should return");
    }

    #[test]
    fn test_should_reject_unknown_ids() {
        let f = fixture();
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");

        for (book_id, user_id) in [("B2", "U1"), ("B1", "U2"), ("B2", "U2")] {
            let err = f.checkout_svc.issue(book_id, user_id).expect_err("should reject issue");
            assert!(matches!(err, LibraryError::NotFound { .. }));
            assert_eq!(INVALID_BOOK_OR_USER, err.message());
            let err = f.checkout_svc.returned(book_id, user_id).expect_err("should reject return");
            assert_eq!(INVALID_BOOK_OR_USER, err.message());
        }
        assert_eq!(BookStatus::Available, f.catalog_svc.find_book_by_id("B1").expect("should find").book_status);
        assert_eq!(2, f.publisher.events().len());
    }

    #[test]
    fn test_should_not_issue_twice() {
        let f = fixture();
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");
        let _ = f.user_svc.add_user(&UserEntity::new("U2", "Bob")).expect("should add user");
        let _ = f.checkout_svc.issue("B1", "U1").expect("should issue");

        for user_id in ["U1", "U2"] {
            let err = f.checkout_svc.issue("B1", user_id).expect_err("should reject issue");
            assert!(matches!(err, LibraryError::Validation { .. }));
            assert_eq!(ALREADY_ISSUED, err.message());
        }
        assert_eq!(1, f.user_svc.find_user_by_id("U1").expect("should find").borrowed_books.len());
        assert!(f.user_svc.find_user_by_id("U2").expect("should find").borrowed_books.is_empty());
        assert_consistent(&f);
    }

    #[test]
    fn test_should_not_return_for_other_user() {
        let f = fixture();
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");
        let _ = f.user_svc.add_user(&UserEntity::new("U2", "Bob")).expect("should add user");

        let err = f.checkout_svc.returned("B1", "U1").expect_err("should reject available book");
        assert_eq!(NOT_BORROWED, err.message());

        let _ = f.checkout_svc.issue("B1", "U1").expect("should issue");
        let err = f.checkout_svc.returned("B1", "U2").expect_err("should reject other user");
        assert!(matches!(err, LibraryError::Validation { .. }));
        assert_eq!(NOT_BORROWED, err.message());
        assert_eq!(BookStatus::Issued, f.catalog_svc.find_book_by_id("B1").expect("should find").book_status);
        assert_consistent(&f);
    }

    #[test]
    fn test_should_only_reach_first_duplicate() {
        let f = fixture();
        let first = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let second = f.catalog_svc.add_book(&BookEntity::new("b1", "Emma", "Austen")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");

        let issued = f.checkout_svc.issue("B1", "U1").expect("should issue");
        assert_eq!(first.id(), issued.book.id());
        let err = f.checkout_svc.issue("b1", "U1").expect_err("should resolve to first copy");
        assert_eq!(ALREADY_ISSUED, err.message());

        let books = f.catalog_svc.list_books();
        assert_eq!(BookStatus::Issued, books[0].book_status);
        assert_eq!(second.id(), books[1].id());
        assert_eq!(BookStatus::Available, books[1].book_status);
    }

    #[test]
    fn test_should_keep_invariant_over_sequence() {
        let f = fixture();
        for (id, title) in [("B1", "Dune"), ("B2", "Emma"), ("B3", "Ulysses")] {
            let _ = f.catalog_svc.add_book(&BookEntity::new(id, title, "someone")).expect("should add book");
        }
        for (id, name) in [("U1", "Alice"), ("U2", "Bob")] {
            let _ = f.user_svc.add_user(&UserEntity::new(id, name)).expect("should add user");
        }
        let steps = [
            (true, "B1", "U1"), (true, "B2", "U1"), (true, "B1", "U2"), (false, "B2", "U2"),
            (true, "B3", "U2"), (false, "B1", "U1"), (true, "B1", "U2"), (false, "B2", "U1"),
            (false, "B2", "U1"), (true, "B2", "U1"), (false, "B9", "U1"), (false, "B3", "U2"),
        ];
        for (issue, book_id, user_id) in steps {
            let _ = if issue {
                f.checkout_svc.issue(book_id, user_id)
            } else {
                f.checkout_svc.returned(book_id, user_id)
            };
            assert_consistent(&f);
        }
        let u1 = f.user_svc.find_user_by_id("U1").expect("should find");
        let u2 = f.user_svc.find_user_by_id("U2").expect("should find");
        assert_eq!("U1 - Alice (Borrowed: 1)", u1.to_string());
        assert_eq!("U2 - Bob (Borrowed: 1)", u2.to_string());
    }

    #[test]
    fn test_should_restore_book_when_user_update_fails() {
        let config = Configuration::new("test");
        let publisher = Rc::new(MemoryPublisher::default());
        let store = RepositoryStore::with_publisher(publisher.clone());
        let f = Fixture {
            publisher: publisher.clone(),
            catalog_svc: create_catalog_service(&config, &store),
            user_svc: create_user_service(&config, &store),
            checkout_svc: Box::new(CheckoutServiceImpl::new(
                &config,
                Box::new(ReadOnlyUsers(create_user_service(&config, &store))),
                create_catalog_service(&config, &store),
                publisher.clone())),
        };
        let _ = f.catalog_svc.add_book(&BookEntity::new("B1", "Dune", "Herbert")).expect("should add book");
        let _ = f.user_svc.add_user(&UserEntity::new("U1", "Alice")).expect("should add user");

        let err = f.checkout_svc.issue("B1", "U1").expect_err("should fail to store user");
        assert!(matches!(err, LibraryError::Runtime { .. }));
        assert_eq!(BookStatus::Available, f.catalog_svc.find_book_by_id("B1").expect("should find").book_status);
        assert!(f.user_svc.find_user_by_id("U1").expect("should find").borrowed_books.is_empty());
        assert_consistent(&f);
        assert_eq!(2, f.publisher.events().len());

        // the restored book can still be issued once the user table accepts changes
        let _ = create_checkout_service(&config, &store).issue("B1", "U1").expect("should issue");
        assert_consistent(&f);
    }
}
