use docopt::Docopt;
use log::{info, warn};
use micromouse_maze::{
    generators,
    units::{ColumnsCount, RowsCount},
    Maze,
};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Maze Driver

Usage:
    maze_driver -h | --help
    maze_driver render [--rows=<r> --columns=<c>] [--random-walls=<n>] [--text-out=<path>]
    maze_driver check <path>

Options:
    -h --help              Show this screen.
    --rows=<r>             The number of rows in the maze [default: 16].
    --columns=<c>          The number of columns in the maze [default: 16].
    --random-walls=<n>     Randomly add n interior walls before the maze is finalized.
    --text-out=<path>      Output file path for the ASCII maze, printed to stdout if not given.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_render: bool,
    cmd_check: bool,
    arg_path: String,
    flag_rows: usize,
    flag_columns: usize,
    flag_random_walls: Option<usize>,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::micromouse_maze::errors::Error, ::micromouse_maze::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if args.cmd_render {
        render_maze(&args)
    } else if args.cmd_check {
        check_maze(&args.arg_path)
    } else {
        Ok(())
    }
}

fn render_maze(args: &MazeArgs) -> Result<()> {

    let mut maze = Maze::with_dimensions(RowsCount(args.flag_rows), ColumnsCount(args.flag_columns))?;

    if let Some(wall_count) = args.flag_random_walls {
        let added = generators::scatter_walls(&mut maze, wall_count, &mut rand::thread_rng());
        if added < wall_count {
            warn!("Only room for {} of the {} requested walls", added, wall_count);
        }
    }
    maze.finalize_maze();

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&maze.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("Wrote {}x{} maze to {}", args.flag_rows, args.flag_columns, args.flag_text_out);
    }

    Ok(())
}

fn check_maze(file_path: &str) -> Result<()> {

    let text = read_text_from_file(file_path)
        .chain_err(|| format!("Failed to read maze text file {}", file_path))?;
    let maze = Maze::from_ascii(&text)
        .chain_err(|| format!("{} does not hold a valid maze", file_path))?;

    info!("{} holds a valid {}x{} maze", file_path, maze.rows().0, maze.columns().0);
    println!("{}", maze);

    Ok(())
}

fn read_text_from_file(file_name: &str) -> io::Result<String> {
    let mut f = File::open(file_name)?;
    let mut text = String::new();
    f.read_to_string(&mut text)?;
    Ok(text)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
