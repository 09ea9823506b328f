pub mod routers;
pub mod validation;

pub use routers::LoginRouter;
pub use validation::RegexEmailValidator;
