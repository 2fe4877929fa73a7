use {
    clap::Parser,
    indicatif::ProgressBar,
    matrixgen::Matrix,
    std::path::Path,
};

fn validate_dim(s: &str) -> std::result::Result<usize, String> {
    let val = s.parse::<i64>().map_err(|e| format!("{e}"))?;
    // Negative dimensions behave as zero iterations.
    Ok(val.max(0) as usize)
}

#[derive(Parser)]
#[command(about = "Generate a matrix with random numbers")]
struct Args {
    #[arg(long = "output_dir", default_value = "", help = "Output directory")]
    output_dir: String,

    #[arg(
        long,
        value_parser = validate_dim,
        allow_negative_numbers = true,
        default_value_t = matrixgen::ROWS_DEFAULT,
        help = "Number of rows in the matrix"
    )]
    rows: usize,

    #[arg(
        long,
        value_parser = validate_dim,
        allow_negative_numbers = true,
        default_value_t = matrixgen::COLS_DEFAULT,
        help = "Number of columns in the matrix"
    )]
    cols: usize,
}

fn main() {
    let args = Args::parse();

    let pb = ProgressBar::new(args.rows as u64);
    let matrix = Matrix::generate(args.rows, args.cols, || pb.inc(1));
    pb.finish();

    match matrix.save(Path::new(&args.output_dir)) {
        Ok(path) => println!("Matrix saved to {}", path.display()),
        Err(e) => println!("An error occurred: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        assert_eq!(validate_dim("-3").unwrap(), 0);
        assert_eq!(validate_dim("0").unwrap(), 0);
        assert_eq!(validate_dim("7").unwrap(), 7);
    }

    #[test]
    fn non_integer_dimension_is_rejected() {
        assert!(validate_dim("abc").is_err());
        assert!(validate_dim("2.5").is_err());
    }

    #[test]
    fn parses_underscored_flags_with_defaults() {
        let args = Args::try_parse_from(["matrixgen-cli"]).unwrap();
        assert_eq!(args.output_dir, "");
        assert_eq!(args.rows, matrixgen::ROWS_DEFAULT);
        assert_eq!(args.cols, matrixgen::COLS_DEFAULT);

        let args = Args::try_parse_from([
            "matrixgen-cli",
            "--output_dir",
            "out",
            "--rows",
            "-2",
            "--cols",
            "3",
        ])
        .unwrap();
        assert_eq!(args.output_dir, "out");
        assert_eq!(args.rows, 0);
        assert_eq!(args.cols, 3);
    }
}
