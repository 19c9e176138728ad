mod table;

pub use table::{Column, ColumnValues, Table};
