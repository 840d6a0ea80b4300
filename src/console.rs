pub mod dispatcher;
pub mod io;
pub mod menu;
pub mod view;
