use pico_args::Arguments;

pub struct Args {
    pub specs: Vec<String>,
}

impl Args {
    pub fn parse() -> anyhow::Result<Self> {
        let args = Arguments::from_env();

        let specs = args
            .finish()
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| anyhow::anyhow!("argument {arg:?} is not valid UTF-8"))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { specs })
    }
}
