// 伤害计算器命令行入口
// 开发心理：命令行代替聊天平台传递指令，一行输入对应一条消息
// 用户输入错误属于正常回复，只有配置和IO错误才以非零状态退出

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};

use roco_damage::{
    CalculatorConfig, ConfigManager, DamageCommand, DamageRoller, RandomGenerator, Response,
};

#[derive(Debug, Parser)]
#[command(name = "roco-damage", version, about = "洛克王国页游伤害计算器")]
struct Cli {
    /// TOML配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 随机种子，覆盖配置文件
    #[arg(long)]
    seed: Option<u64>,

    /// 以JSON输出计算结果
    #[arg(long)]
    json: bool,

    /// 指令文本，例如：伤害计算 威力120 攻击490 防御340
    words: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        error!("运行失败: {:#}", e);
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    roco_damage::init(&config)?;

    let mut rng = match config.random.seed {
        Some(seed) => RandomGenerator::with_seed(seed),
        None => RandomGenerator::new(),
    };
    debug!("随机种子: {}", rng.get_seed());

    let command = DamageCommand::new();
    let json = config.output.json;

    if !cli.words.is_empty() {
        let text = cli.words.join(" ");
        println!("{}", respond(&command, &text, &mut rng, json)?);
        debug!("随机数使用次数: {}", rng.total_rolls());
        return Ok(());
    }

    info!("从标准输入读取指令");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("读取标准输入失败")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}\n", respond(&command, &line, &mut rng, json)?)?;
        stdout.flush()?;
    }
    debug!("随机数使用次数: {}", rng.total_rolls());
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    if cli.seed.is_some() {
        config.random.seed = cli.seed;
    }
    if cli.json {
        config.output.json = true;
    }
    Ok(config)
}

fn respond<R: DamageRoller>(
    command: &DamageCommand,
    text: &str,
    roller: &mut R,
    json: bool,
) -> anyhow::Result<String> {
    if !json {
        return Ok(command.reply(text, roller));
    }

    match command.execute(text, roller) {
        Ok(Response::Report(report)) => Ok(serde_json::to_string_pretty(&report)?),
        Ok(response) => Ok(response.render()),
        Err(e) => Ok(e.to_string()),
    }
}
