mod test_catalog;
mod test_domain;
