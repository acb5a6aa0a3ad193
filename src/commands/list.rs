use crate::core::{
    command_init::AppContext,
    error::{GitReposError, Result},
    output::print_section_header,
};

/// Print the ranked repository list without prompting
pub fn execute_list(ctx: &AppContext) -> Result<()> {
    let records = ctx.scan()?;
    if records.is_empty() {
        return Err(GitReposError::NoRepositories);
    }

    print_section_header(&format!("Repositories in {}", ctx.root().display()));
    for (index, line) in ctx.ranked_lines(records).iter().enumerate() {
        println!("[{}] {line}", index + 1);
    }
    println!();

    Ok(())
}
