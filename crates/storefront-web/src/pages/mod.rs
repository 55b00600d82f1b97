//! Page Components

mod cart;
mod checkout;
mod home;
mod payment;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use payment::{PaymentFailurePage, PaymentSuccessPage};
