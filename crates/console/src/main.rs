use std::io;

use anyhow::Result;

use storefront_console::demo_catalog;
use storefront_console::repl::Repl;
use storefront_store::Store;

fn main() -> Result<()> {
    storefront_observability::init();

    let store = Store::new(demo_catalog()?);
    tracing::info!(products = store.products().len(), "catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(store, stdin.lock(), stdout.lock());
    repl.run()?;

    Ok(())
}
