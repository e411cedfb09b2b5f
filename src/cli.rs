use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(long)]
    pub text: bool,

    #[clap(long)]
    pub verbose: bool,
}

pub fn get_args() -> Args {
    Args::parse()
}
