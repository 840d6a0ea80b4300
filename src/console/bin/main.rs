use clap::Parser;
use catalogue::console::dispatcher::Dispatcher;
use catalogue::console::io::Console;
use catalogue::core::controller::AppState;
use catalogue::core::domain::Configuration;
use catalogue::core::library::LibraryResult;
use catalogue::gateway::GatewayPublisherVia;
use catalogue::utils::logs::setup_tracing;

fn main() -> LibraryResult<()> {
    let config = Configuration::parse();
    setup_tracing(&config);

    let state = AppState::new(config, GatewayPublisherVia::Logs);
    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    Dispatcher::new(state, console).run()
}
