//! Command Line Interface
//!
//! One subcommand per cart or checkout operation. Each run loads the cart from
//! disk, applies the command and exits.

use std::path::PathBuf;

use anyhow::{Context, bail};
use cart_checkout::{BillingDetails, CheckoutError, SessionStatus};
use cart_core::{DEFAULT_CURRENCY, NewCartItem, Product, ProductCategory, catalog, format_price};
use clap::{Args, Parser, Subcommand};

use crate::state::{self, Shop};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "PC Computer storefront", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the persisted cart
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the bundled catalog
    Products,
    /// Add one unit of an item to the cart
    Add(AddArgs),
    /// Set the quantity of a cart line; zero or less removes it
    SetQty(SetQtyArgs),
    /// Remove a cart line
    Remove { product_id: String },
    /// Empty the cart
    Clear,
    /// Print the cart and its total
    Show,
    /// Check out the whole cart
    Checkout(CheckoutArgs),
    /// Pay for a single item without touching the cart
    BuyNow(BuyNowArgs),
    /// Look up the outcome of a payment session
    Status { session_id: String },
    /// Record a completed payment and empty the cart
    Complete,
}

#[derive(Debug, Args)]
struct AddArgs {
    product_id: String,
    name: String,
    /// Unit price in the smallest currency unit
    price_in_cents: u64,

    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Debug, Args)]
struct SetQtyArgs {
    product_id: String,
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct Identity {
    /// Signed-in principal; checkout is refused without one
    #[arg(long, env = "STOREFRONT_PRINCIPAL")]
    principal: Option<String>,
}

impl Identity {
    fn signed_in(&self) -> bool {
        self.principal.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    #[command(flatten)]
    identity: Identity,

    #[arg(long)]
    full_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    street: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: String,
    #[arg(long)]
    postal_code: String,
    #[arg(long, default_value = "India")]
    country: String,
}

impl From<&CheckoutArgs> for BillingDetails {
    fn from(args: &CheckoutArgs) -> Self {
        Self {
            full_name: args.full_name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            street: args.street.clone(),
            city: args.city.clone(),
            state: args.state.clone(),
            postal_code: args.postal_code.clone(),
            country: args.country.clone(),
        }
    }
}

#[derive(Debug, Args)]
struct BuyNowArgs {
    #[command(flatten)]
    identity: Identity,

    product_id: u64,
    name: String,
    /// Unit price in the smallest currency unit
    price_in_cents: u64,
}

impl Cli {
    pub(crate) async fn run(self) -> anyhow::Result<()> {
        if matches!(self.command, Commands::Products) {
            print_products();
            return Ok(());
        }

        let mut shop = state::open(state::data_dir(self.data_dir))?;

        match self.command {
            Commands::Products => {}
            Commands::Add(args) => {
                let mut item =
                    NewCartItem::new(args.product_id, args.name, args.price_in_cents, args.currency)
                        .with_description(args.description);
                if let Some(url) = args.image_url {
                    item = item.with_image_url(url);
                }
                shop.add_to_cart(item);
                print_cart(&shop);
            }
            Commands::SetQty(args) => {
                shop.update_quantity(&args.product_id, args.quantity);
                print_cart(&shop);
            }
            Commands::Remove { product_id } => {
                shop.remove_from_cart(&product_id);
                print_cart(&shop);
            }
            Commands::Clear => {
                shop.clear_cart();
                println!("Cart cleared");
            }
            Commands::Show => print_cart(&shop),
            Commands::Checkout(args) => {
                let billing = BillingDetails::from(&args);
                shop.begin_checkout(args.identity.signed_in(), &billing)
                    .await
                    .map_err(explain)?;
                println!("Billing address: {}", billing.billing_address());
            }
            Commands::BuyNow(args) => {
                let product = Product {
                    id: args.product_id,
                    name: args.name,
                    description: String::new(),
                    category: ProductCategory::Computers,
                    is_available: true,
                    price: Some(args.price_in_cents),
                    image_url: None,
                };
                shop.buy_now(args.identity.signed_in(), &product)
                    .await
                    .map_err(explain)?;
            }
            Commands::Status { session_id } => {
                let status = shop
                    .initiator()
                    .session_status(&session_id)
                    .await
                    .context("failed to fetch session status")?;
                match status {
                    SessionStatus::Completed {
                        response,
                        user_principal,
                    } => {
                        println!("completed: {response}");
                        if let Some(principal) = user_principal {
                            println!("principal: {principal}");
                        }
                    }
                    SessionStatus::Failed { error } => bail!("payment failed: {error}"),
                }
            }
            Commands::Complete => {
                shop.complete_purchase();
                println!("Payment recorded, cart cleared");
            }
        }

        Ok(())
    }
}

fn explain(error: CheckoutError) -> anyhow::Error {
    tracing::debug!(error = %error, retryable = error.is_retryable(), "Checkout failed");
    anyhow::anyhow!("{}", error.user_message())
}

fn print_products() {
    for product in catalog::products() {
        let price = product
            .price
            .map_or_else(|| "Contact for price".to_string(), |cents| {
                format_price(u128::from(cents), DEFAULT_CURRENCY)
            });
        println!(
            "{:>3}  {:<24} {:<12} {}",
            product.id,
            product.name,
            product.category.as_str(),
            price
        );
    }
}

fn print_cart(shop: &Shop) {
    let cart = shop.cart();
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for item in cart.items() {
        println!(
            "{:<12} {:<24} x{:<4} {}",
            item.product_id,
            item.product_name,
            item.quantity,
            format_price(item.line_total(), &item.currency)
        );
    }

    let currency = cart
        .items()
        .first()
        .map_or(DEFAULT_CURRENCY, |item| item.currency.as_str());
    println!(
        "{} unit(s), total {}",
        cart.cart_item_count(),
        format_price(cart.cart_total(), currency)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("storefront").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_add_parses_price_and_defaults_currency() {
        let cli = parse(&["add", "p1", "Laptop", "4999900"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.price_in_cents, 4_999_900);
                assert_eq!(args.currency, DEFAULT_CURRENCY);
                assert!(args.image_url.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_set_qty_accepts_negative_quantities() {
        let cli = parse(&["set-qty", "p1", "-3"]);
        match cli.command {
            Commands::SetQty(args) => assert_eq!(args.quantity, -3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_checkout_builds_billing_details() {
        let cli = parse(&[
            "checkout",
            "--principal",
            "abc-123",
            "--full-name",
            "Asha Rao",
            "--email",
            "asha@example.com",
            "--phone",
            "9876543210",
            "--street",
            "12 MG Road",
            "--city",
            "Bengaluru",
            "--state",
            "Karnataka",
            "--postal-code",
            "560001",
        ]);
        match cli.command {
            Commands::Checkout(args) => {
                assert!(args.identity.signed_in());
                let billing = BillingDetails::from(&args);
                assert_eq!(billing.country, "India");
                assert!(billing.validate().is_ok());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_blank_principal_is_not_signed_in() {
        let identity = Identity {
            principal: Some("  ".into()),
        };
        assert!(!identity.signed_in());
        assert!(!Identity { principal: None }.signed_in());
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let result = Cli::try_parse_from(["storefront", "add", "p1", "Laptop", "12.50"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cart_persists_between_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let mut cli = parse(&["add", "p1", "Laptop", "1000"]);
        cli.data_dir = Some(tmp.path().to_path_buf());
        cli.run().await.unwrap();

        let cli = parse(&["--data-dir", dir, "add", "p1", "Laptop", "1000"]);
        cli.run().await.unwrap();

        let shop = state::open(tmp.path().to_path_buf()).unwrap();
        assert_eq!(shop.cart().cart_item_count(), 2);
        assert_eq!(shop.cart().cart_total(), 2000);
    }

    #[tokio::test]
    async fn test_checkout_without_principal_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        parse(&["--data-dir", dir, "add", "p1", "Laptop", "1000"]).run().await.unwrap();

        let cli = Cli {
            data_dir: Some(tmp.path().to_path_buf()),
            command: Commands::Checkout(CheckoutArgs {
                identity: Identity { principal: None },
                full_name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                phone: "9876543210".into(),
                street: "12 MG Road".into(),
                city: "Bengaluru".into(),
                state: "Karnataka".into(),
                postal_code: "560001".into(),
                country: "India".into(),
            }),
        };
        let err = cli.run().await.unwrap_err();
        assert_eq!(err.to_string(), CheckoutError::NotSignedIn.user_message());

        let shop = state::open(tmp.path().to_path_buf()).unwrap();
        assert_eq!(shop.cart().cart_item_count(), 1);
    }
}
