mod change_handler;
mod dispatcher;
mod employee_form;
mod fields;
mod notice;
mod snapshot;
mod validation;

pub use self::change_handler::*;
pub use self::dispatcher::*;
pub use self::employee_form::*;
pub use self::fields::*;
pub use self::notice::*;
pub use self::snapshot::*;
pub use self::validation::*;
