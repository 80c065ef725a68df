pub mod products_queries;
