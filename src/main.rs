use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use dotenvy::dotenv;

use catalog_admin::api::{ApiConfig, RestApi};
use catalog_admin::domain::search::PageRequest;
use catalog_admin::services::listing::{ListingPage, ProductTable};
use catalog_admin::services::purchasing::{PurchaseOutcome, PurchasingPage};
use catalog_admin::services::registering::{RegisteringPage, SaveOutcome};
use catalog_admin::shell::TermShell;
use catalog_admin::{PATH_PRODUCT_PURCHASING, PATH_PRODUCT_REGISTERING, PATH_PRODUCT_REGISTERING_NEW};

const HELP: &str = "\
Commands:
  name [TEXT]      set or clear the product name filter
  code [TEXT]      set or clear the product code filter
  genre [TEXT]     set or clear the genre filter
  eos on|off       include discontinued products
  search           run the search
  page N           go to page N (0-based)
  size N           change the page size
  clear            reset filters and results
  genres           list the genre facet values
  new              register a new product
  open CODE        edit the product with CODE
  buy CODE         record a purchase of CODE
  help             show this help
  quit             exit";

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let base_url = match env::var("CATALOG_API_URL") {
        Ok(value) => value,
        Err(_) => {
            log::error!("CATALOG_API_URL environment variable not set");
            std::process::exit(1);
        }
    };

    let timeout = env::var("CATALOG_API_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(30);

    let config = ApiConfig::new(base_url).timeout(Duration::from_secs(timeout));
    let api = match RestApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to create the API client: {err}");
            std::process::exit(1);
        }
    };

    let shell = TermShell::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut listing = ListingPage::new();
    listing.on_init(&api, &shell).await;
    listing.on_view_ready(&shell);
    println!("{HELP}");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        match command {
            "help" => println!("{HELP}"),
            "name" => listing.criteria.product_name = rest,
            "code" => listing.criteria.product_code = rest,
            "genre" => listing.criteria.product_genre = rest,
            "eos" => listing.criteria.end_of_sale = rest == "on",
            "search" => {
                let table = listing.submit_search(&api, &shell).await;
                print_table(&table, listing.page());
            }
            "page" => match rest.parse::<usize>() {
                Ok(index) => {
                    let page = PageRequest::new(index, listing.page().page_size);
                    let table = listing.change_page(&api, &shell, page).await;
                    print_table(&table, listing.page());
                }
                Err(_) => println!("usage: page N"),
            },
            "size" => match rest.parse::<usize>() {
                Ok(size) if size > 0 => {
                    let page = PageRequest::new(listing.page().page_index, size);
                    let table = listing.change_page(&api, &shell, page).await;
                    print_table(&table, listing.page());
                }
                _ => println!("usage: size N (N > 0)"),
            },
            "clear" => {
                listing.clear();
                println!("Filters and results cleared.");
            }
            "genres" => println!("Genres: {}", listing.genres.join(", ")),
            "new" => {
                listing.open_new_product(&shell);
                route(&api, &shell, &mut lines).await?;
            }
            "open" if !rest.is_empty() => {
                listing.open_product(&shell, &rest);
                route(&api, &shell, &mut lines).await?;
            }
            "buy" if !rest.is_empty() => {
                run_purchasing(&api, &shell, &mut lines, &rest).await?;
            }
            "quit" | "exit" => break,
            _ => println!("Unknown command; type `help`."),
        }
    }

    Ok(())
}

/// Minimal router: pick up the path a page asked the shell to navigate to
/// and switch screens accordingly.
async fn route(api: &RestApi, shell: &TermShell, lines: &mut Lines<'_>) -> io::Result<()> {
    let Some(path) = shell.take_navigation() else {
        return Ok(());
    };

    if path == PATH_PRODUCT_REGISTERING_NEW {
        run_registering(api, shell, lines, None).await?;
    } else if let Some(code) = path.strip_prefix(&format!("{PATH_PRODUCT_REGISTERING}/")) {
        run_registering(api, shell, lines, Some(code)).await?;
    } else if let Some(code) = path.strip_prefix(&format!("{PATH_PRODUCT_PURCHASING}/")) {
        run_purchasing(api, shell, lines, code).await?;
    }
    // Back on the listing screen either way.
    Ok(())
}

async fn run_registering(
    api: &RestApi,
    shell: &TermShell,
    lines: &mut Lines<'_>,
    product_code: Option<&str>,
) -> io::Result<()> {
    let mut page = RegisteringPage::new();
    page.on_init(api, shell, product_code).await;
    page.on_view_ready(shell);

    if product_code.is_some() && !page.is_edit() {
        // The load failed; the error banner already said why.
        return Ok(());
    }

    if !page.is_edit() {
        page.form.product_code = prompt(lines, "Product code")?;
    }
    page.form.product_name = prompt_default(lines, "Name", &page.form.product_name)?;
    println!("Genres: {}", page.genres.join(", "));
    page.form.product_genre = prompt_default(lines, "Genre", &page.form.product_genre)?;
    page.form.product_size_standard =
        prompt_default(lines, "Size standard", &page.form.product_size_standard)?;
    page.form.product_color = prompt_default(lines, "Color", &page.form.product_color)?;
    page.form.product_unit_price = prompt_number(lines, "Unit price")?;
    page.form.product_stock_quantity = prompt_number(lines, "Stock quantity")?;
    page.form.end_of_sale = prompt(lines, "End of sale (y/N)")?.eq_ignore_ascii_case("y");

    let image = prompt(lines, "Image file (blank for none)")?;
    if !image.is_empty() {
        if let Err(err) = page.attach_image(Path::new(&image)).await {
            println!("Image skipped: {err}");
        }
    }

    match page.save(api, shell).await {
        SaveOutcome::Invalid(errors) => {
            println!("The form has errors; nothing was saved:");
            for (field, codes) in errors {
                println!("  {field}: {}", codes.join(", "));
            }
        }
        SaveOutcome::Failed => {}
        SaveOutcome::Saved(product) => {
            println!("Saved {}.", product.product_code);
            shell.take_navigation();
        }
    }
    Ok(())
}

async fn run_purchasing(
    api: &RestApi,
    shell: &TermShell,
    lines: &mut Lines<'_>,
    product_code: &str,
) -> io::Result<()> {
    let mut page = PurchasingPage::new();
    page.on_init(api, shell, product_code).await;
    page.on_view_ready(shell);

    let Some(detail) = page.detail.clone() else {
        return Ok(());
    };

    println!(
        "{} ({}) — unit price {}, {} in stock",
        detail.product_name,
        detail.product_code,
        detail.product_purchase_unit_price,
        detail.product_stock_quantity
    );

    page.form.product_purchase_name = prompt(lines, "Purchaser name")?;
    page.form.product_purchase_quantity = prompt_number(lines, "Quantity")?;

    match page.submit(api, shell).await {
        PurchaseOutcome::Invalid(errors) => {
            println!("The purchase has errors; nothing was recorded:");
            for (field, codes) in errors {
                println!("  {field}: {}", codes.join(", "));
            }
        }
        PurchaseOutcome::Failed => {}
        PurchaseOutcome::Completed(detail) => {
            println!("{} now has {} in stock.", detail.product_code, detail.product_stock_quantity);
        }
    }
    Ok(())
}

fn prompt(lines: &mut Lines<'_>, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next().transpose()? {
        Some(line) => Ok(line.trim().to_string()),
        None => Ok(String::new()),
    }
}

fn prompt_default(lines: &mut Lines<'_>, label: &str, current: &str) -> io::Result<String> {
    let label = if current.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{current}]")
    };
    let value = prompt(lines, &label)?;
    if value.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(value)
    }
}

fn prompt_number(lines: &mut Lines<'_>, label: &str) -> io::Result<i64> {
    loop {
        let value = prompt(lines, label)?;
        if value.is_empty() {
            return Ok(0);
        }
        match value.parse::<i64>() {
            Ok(number) => return Ok(number),
            Err(_) => println!("Enter a whole number."),
        }
    }
}

fn print_table(table: &ProductTable, page: PageRequest) {
    if table.rows.is_empty() {
        println!("No products found.");
        return;
    }

    println!(
        "{:>3}  {:<16} {:<28} {:<6} {:<12} {:<10} {:>12} {:>8}  {}",
        "no", "code", "name", "genre", "size", "color", "price", "stock", "eos"
    );
    for row in &table.rows {
        println!(
            "{:>3}  {:<16} {:<28} {:<6} {:<12} {:<10} {:>12} {:>8}  {}",
            row.no,
            row.product_code,
            row.product_name,
            row.product_genre,
            row.product_size_standard,
            row.product_color,
            row.product_unit_price,
            row.product_stock_quantity,
            if row.end_of_sale { "yes" } else { "no" }
        );
    }
    println!(
        "Page {} ({} rows per page, {} matches in total)",
        page.page_index, page.page_size, table.total_count
    );
}
