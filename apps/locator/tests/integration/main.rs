mod test_resolver;
mod test_reverse_geocode;
mod test_routes;
