// Project recommendation: keyword scoring over the catalog.
// Pure and synchronous; the handler only validates and serializes.

pub mod handlers;
pub mod matcher;
