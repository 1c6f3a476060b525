mod amount_option;
mod creem;
mod currency;
mod model_price;
mod order;
mod pay_method;
mod quote;

pub use amount_option::*;
pub use creem::*;
pub use currency::*;
pub use model_price::*;
pub use order::*;
pub use pay_method::*;
pub use quote::*;
