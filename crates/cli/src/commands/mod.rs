pub(crate) mod catalog;
pub(crate) mod legacy;
pub(crate) mod migrate;
pub(crate) mod serve;
