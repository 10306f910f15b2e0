use anyhow::Result;

fn main() -> Result<()> {
    konspekt_cli::main_entry()
}
