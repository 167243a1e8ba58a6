//! The read-eval-print loop.
//!
//! Generic over its reader and writer so tests can script a whole session
//! and inspect the transcript.

use std::io::{self, BufRead, Write};

use storefront_core::Money;
use storefront_store::{OrderLine, ProductId, Store};

/// One collected line of the order sub-dialogue.
///
/// Name and unit price are copied out of the catalog at collection time so
/// the shopping list can be printed without holding a borrow on the store.
struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u64,
}

/// Menu-driven console over a [`Store`].
pub struct Repl<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.list_products()?,
                "2" => self.show_total_quantity()?,
                "3" => self.make_order()?,
                "4" => {
                    writeln!(self.output, "Thank you for visiting!")?;
                    break;
                }
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number from 1 to 4."
                    )?;
                }
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Store!")?;
        writeln!(self.output, "1. List all products")?;
        writeln!(self.output, "2. Show total stock quantity")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_products(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nAvailable products:")?;
        for product in self.store.products() {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    fn show_total_quantity(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nTotal quantity in store: {}",
            self.store.total_quantity()
        )
    }

    /// The order sub-dialogue: collect lines until "done", confirm, submit.
    ///
    /// Input errors (unknown product, bad quantity) reject the line and
    /// re-prompt; they never abort the whole order. End of input abandons
    /// the order without mutation.
    fn make_order(&mut self) -> io::Result<()> {
        let mut cart: Vec<CartLine> = Vec::new();
        loop {
            let Some(name) = self.prompt("\nEnter product name (or 'done' to finish): ")? else {
                return Ok(());
            };
            if name.eq_ignore_ascii_case("done") {
                break;
            }

            let Some(product) = self.store.find_product(&name) else {
                writeln!(self.output, "Product not found.")?;
                continue;
            };
            let product_id = product.id_typed();
            let display_name = product.name().to_string();
            let unit_price = product.price();

            let Some(raw) = self.prompt(&format!("Enter quantity of '{display_name}': "))? else {
                return Ok(());
            };
            match raw.parse::<i64>() {
                Ok(quantity) if quantity <= 0 => {
                    writeln!(self.output, "Quantity must be positive.")?;
                }
                Ok(quantity) => cart.push(CartLine {
                    product_id,
                    name: display_name,
                    unit_price,
                    quantity: quantity as u64,
                }),
                Err(_) => {
                    writeln!(self.output, "Invalid quantity. Please enter a number.")?;
                }
            }
        }

        if cart.is_empty() {
            writeln!(self.output, "No items ordered.")?;
            return Ok(());
        }

        writeln!(self.output, "\nYour shopping list:")?;
        for line in &cart {
            writeln!(
                self.output,
                "{} x {} = {}",
                line.name,
                line.quantity,
                line.unit_price * line.quantity
            )?;
        }

        let Some(confirm) = self.prompt("Confirm order? (yes/no): ")? else {
            return Ok(());
        };
        if !confirm.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "Order cancelled.")?;
            return Ok(());
        }

        let lines: Vec<OrderLine> = cart
            .iter()
            .map(|line| OrderLine::new(line.product_id, line.quantity))
            .collect();
        match self.store.order(&lines) {
            Ok(total) => {
                tracing::info!(lines = lines.len(), total = %total, "order committed");
                writeln!(self.output, "\nOrder processed. Total cost: {total}")?;
            }
            Err(err) => {
                tracing::warn!(error = %err, "order rejected");
                writeln!(self.output, "Order failed: {err}")?;
            }
        }
        Ok(())
    }
}
