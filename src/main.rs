use clap::Parser;
use log::{ error, info };
use simple_logger::SimpleLogger;

use dalifood_insumos::{
    config::Config,
    order::orders_for_delivery,
    reader,
    report::IngredientReport,
    Catalog,
    IngredientCalculator,
    KitchenError,
    RecipeConfig,
};

fn main() {
    let config = Config::parse();
    if let Err(err) = SimpleLogger::new().with_level(config.log_level).env().init() {
        eprintln!("Could not initialize the logger: {}", err);
    }

    if let Err(err) = run(&config) {
        error!("[MAIN] {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), KitchenError> {
    let catalog = match &config.catalog {
        Some(path) => reader::read_catalog(path)?,
        None => Catalog::default(),
    };
    let recipe_config = match &config.recipes {
        Some(path) => reader::read_recipe_config(path)?,
        None => RecipeConfig::default(),
    };
    let orders = reader::read_orders(&config.orders)?;

    let date = config.delivery_date();
    let target_orders = orders_for_delivery(&orders, date);
    info!("[MAIN] {} orders to produce for {}", target_orders.len(), date);

    let summary = IngredientCalculator::new(&catalog, &recipe_config)?
        .with_policy(config.unknown_product_policy())
        .calculate(&target_orders)?;

    println!("{}", IngredientReport::new(date, &target_orders, &summary, &recipe_config).render());
    Ok(())
}
