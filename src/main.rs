use cpilens::run_cpilens;

fn main() {
    let args_itr = std::env::args_os().skip(1);
    if let Err(e) = run_cpilens(args_itr) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
