// Other modules in this crate `use errors::*;` to get access to everything `error_chain!` creates:
// the Error, ErrorKind, ResultExt, and Result types.
use error_chain::*;

error_chain! {

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("Invalid maze dimensions {} rows x {} columns: both must be at least 1", rows, columns)
        }

        OutOfBounds(row: usize, column: usize) {
            description("cell outside the maze")
            display("The cell at row {}, column {} does not exist within the bounds of the maze", row, column)
        }

        MalformedMaze(reason: String) {
            description("malformed ASCII maze")
            display("The given ASCII maze is malformed: {}", reason)
        }
    }
}
