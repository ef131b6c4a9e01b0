use clap::{Arg, ArgAction, ArgGroup, Command, arg, value_parser};

pub const SCORE_CMD: &str = "score";

pub const DISCRETIZATION_GROUP: &str = "discretization";

pub fn create_score_cli() -> Command {
    Command::new(SCORE_CMD)
        .author("Databio")
        .about("Score regions of interest by the length-weighted mean of the overlapping signal, and optionally discretize the scores into classes.")
        .arg(arg!(--regions <regions> "Regions of interest (gff, gff3 or gtf, optionally gzipped)").required(true))
        .arg(arg!(--scores <scores> "Signal track (bedgraph or wig, optionally gzipped)").required(true))
        .arg(
            arg!(-n --"ignore-negative" "Only accumulate signal above zero; with -d also put negative scores in class 0")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-z --"ignore-zero" "With -d, put zero scores in class 0")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-c --"count-bins" "Record the number of overlapping signal intervals as a CpGs attribute")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-d --"discretize-ignored" "Apply the ignore flags when discretizing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bounds")
                .long("bounds")
                .help("Ascending upper bounds of the discrete classes")
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--quantile <classes> "Discretize into this many quantile classes")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            arg!(--interval <classes> "Discretize into this many equal-width classes")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .group(
            ArgGroup::new(DISCRETIZATION_GROUP)
                .args(["bounds", "quantile", "interval"])
                .multiple(false),
        )
        .arg(arg!(--config <config> "TOML file with scoring settings; flags given here are added on top"))
        .arg(arg!(--"output-dir" <dir> "Write results here instead of next to the regions file"))
        .arg(
            arg!(--gzip "Gzip the output files")
                .action(ArgAction::SetTrue),
        )
}
