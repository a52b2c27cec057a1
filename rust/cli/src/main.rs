use std::io;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = cubik_cli::run(args, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
