use anyhow::Context;
use bitmath::FieldSpec;

use crate::args::Args;

mod args;

/// Identifier the generated expressions read the raw encoded word from.
const ENCODED_WORD: &str = "inst";

fn main() -> anyhow::Result<()> {
    let Args { specs } = Args::parse()?;

    for raw in &specs {
        let spec: FieldSpec = raw
            .parse()
            .with_context(|| format!("invalid field spec `{raw}`"))?;

        print!("{}", spec.render(ENCODED_WORD));
    }

    Ok(())
}
