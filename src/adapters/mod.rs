pub mod product_sampler;
pub mod sql_writer;

#[cfg(test)]
mod sql_writer_test;
