//! Demonstration of the three sequence operations on fixed inputs.
//!
//! Prints one result per line:
//!
//! ```text
//! 25.0
//! [2, 3]
//! [1, 2, 3, 4, 5, 6]
//! ```

use seqkit::prelude::*;

fn main() -> Result<(), SeqError> {
    println!("{:?}", calculate_average(&[10, 20, 30, 40])?);
    println!("{:?}", find_duplicates(&[1, 2, 3, 2, 4, 3]));
    println!("{:?}", flatten(&nested![1, [2, 3], [4, [5, 6]]]));

    Ok(())
}
