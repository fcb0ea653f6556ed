pub mod column_key;
pub mod decomposer;


pub use column_key::{Column, ColumnKey, ColumnTable, Sign};
pub use decomposer::{
    accumulate_into, decompose, decompose_signed, recompose, split_sign, BITS_PER_CELL,
    COLUMNS_PER_WEIGHT,
};
