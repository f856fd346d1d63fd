mod aggregate;
pub mod aggregator;
pub mod barchart;
mod cents;
mod charset;
mod config;
mod currency;
mod date;
pub mod fs;
mod kind;
pub mod legacy;
mod period;
mod record;
mod recordlist;
pub mod report;
pub mod table;
pub mod tree;
pub mod util;

pub use aggregate::Aggregate;
pub use aggregator::Summary;
pub use barchart::Barchart;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use currency::Currency;
pub use date::Date;
pub use fs::Fs;
pub use kind::Kind;
pub use period::Period;
pub use record::Amount;
pub use record::Details;
pub use record::Record;
pub use recordlist::Recordlist;
pub use table::Table;
pub use tree::Tree;
