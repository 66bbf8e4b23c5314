use clap::Parser;

use grewcount::args::CountArgs;
use grewcount::config::{apply_config, load_config};
use grewcount::driver::{CountPlan, run_count};
use grewcount::error::AppResult;
use grewcount::http::ReqwestTransport;

pub(crate) fn run() -> AppResult<()> {
    let args = CountArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(args)?;
    let transport = ReqwestTransport::new()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_count(&plan, &transport, &mut stdout))
}

fn build_plan(args: CountArgs) -> AppResult<CountPlan> {
    let CountArgs {
        endpoint, config, ..
    } = args;
    let mut plan = CountPlan::builtin(endpoint);
    if let Some(config) = load_config(config.as_deref())? {
        apply_config(&mut plan, config)?;
    }
    Ok(plan)
}
