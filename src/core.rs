pub mod estimator;
pub mod form;
pub mod request;
pub mod runtime;
pub mod validation;
