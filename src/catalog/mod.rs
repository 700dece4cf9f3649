pub mod cleanup;
pub mod page;
pub mod record;
pub mod search;
