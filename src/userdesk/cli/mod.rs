pub(crate) mod print;
