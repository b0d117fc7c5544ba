use token_statusline::cli::{Args, arg_error_message, emit, init_logging};
use token_statusline::status::render_status;
use token_statusline::utils::read_stdin;

fn run() -> anyhow::Result<String> {
    let stdin = read_stdin()?;
    tracing::debug!(bytes = stdin.len(), "read stdin");
    render_status(&stdin, cfg!(feature = "colors"))
}

fn main() {
    // Either the full line or a single error line, never both
    let result = match Args::try_parse() {
        Ok(args) => {
            init_logging(args.debug);
            run()
        }
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(anyhow::anyhow!(arg_error_message(&e))),
    };
    let code = emit(&mut std::io::stdout().lock(), result);
    std::process::exit(code);
}
