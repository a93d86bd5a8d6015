//! Page objects mapping semantic banking operations onto UI actions.

mod account;
mod beneficiaries;
mod login;

pub use account::AccountPage;
pub use beneficiaries::BeneficiariesPage;
pub use login::LoginPage;
