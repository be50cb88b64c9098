use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "numsign")]
#[command(about = "Reads a number from stdin and reports whether it is zero, negative or positive")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
