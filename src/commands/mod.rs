pub mod add;
pub mod auto;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod status;
