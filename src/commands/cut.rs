/// The cut run: parse config → read all lines → cut each → print non-empty results.
use crate::cli::output::write_stdout;
use crate::cli::{Cli, OutputCtx};
use crate::cut::{Config, CutError, cut_lines, read_lines};

/// Run `fcut`.
///
/// # Errors
///
/// Returns `CutError` on a missing field list, an empty delimiter, or any
/// input/output failure. Nothing is printed if input reading fails.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), CutError> {
    let results = collect(cli, ctx)?;

    let _t_write = ctx.timer("write_output");
    write_stdout(&results)
}

/// Everything up to (but not including) printing.
fn collect(cli: &Cli, ctx: &OutputCtx) -> Result<Vec<String>, CutError> {
    let t_config = ctx.timer("parse_fields");
    let config = Config::new(cli.fields.as_deref(), &cli.delimiter, cli.only_delimited)?;
    drop(t_config);
    if config.fields.is_empty() {
        ctx.note("field list selects nothing; no lines will be written");
    } else {
        ctx.note(&format!("{} field selector(s)", config.fields.token_count()));
    }

    let t_read = ctx.timer("read_input");
    let lines = read_lines(&cli.files)?;
    drop(t_read);

    let t_cut = ctx.timer("cut");
    let results = cut_lines(&lines, &config);
    drop(t_cut);

    ctx.note(&format!(
        "{} line(s) read, {} line(s) to write",
        lines.len(),
        results.len()
    ));
    Ok(results)
}
