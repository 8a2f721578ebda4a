//! Cart commands.

use anyhow::{bail, Context as _, Result};
use bite_cart::{CartAggregator, CartRepository, Currency, ItemId, MenuItem, Money};
use dialoguer::Confirm;

use super::{AddArgs, ClearArgs, DecArgs, RemoveArgs};
use crate::context::Context;
use crate::output::Output;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let price = parse_price(&args.price, ctx.config.cart.currency)?;

    let mut item = MenuItem::new(args.id, args.name, price);
    if let Some(url) = args.image {
        item = item.with_image_url(url);
    }

    if !cart.add_item(&item) {
        bail!(
            "{} is priced in {}, but the cart is in {}",
            item.id,
            item.price.currency,
            cart.cart().currency()
        );
    }
    let quantity = cart.cart().get(&item.id).map_or(0, |line| line.quantity);
    ctx.output
        .success(&format!("{} in cart: {}", item.name, quantity));
    report(&cart, &ctx.output);
    Ok(())
}

/// Run the dec command.
pub fn dec(args: DecArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let id = ItemId::new(args.id);

    if cart.decrement_item(&id, args.all) {
        match cart.cart().get(&id) {
            Some(line) => ctx
                .output
                .success(&format!("{} in cart: {}", line.name, line.quantity)),
            None => ctx.output.success(&format!("Removed {}", id)),
        }
    } else {
        ctx.output.info(&format!("{} is not in the cart", id));
    }
    report(&cart, &ctx.output);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    dec(
        DecArgs {
            id: args.id,
            all: true,
        },
        ctx,
    )
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from the cart?",
                cart.total_item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    cart.clear();
    ctx.output.success("Cart cleared");
    report(&cart, &ctx.output);
    Ok(())
}

/// Run the show command.
pub fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    report(&cart, &ctx.output);
    Ok(())
}

/// Run the checkout command.
///
/// Prints the snapshot that would be handed to order submission. The cart
/// is not cleared.
pub fn checkout(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let snapshot = cart.checkout_snapshot();

    if snapshot.is_empty() {
        bail!("Cart is empty, nothing to check out");
    }

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize checkout snapshot")?
    );
    ctx.output
        .info("Cart kept as is; run `bite clear` once the order is confirmed");
    Ok(())
}

/// Print the cart lines and totals.
fn report<R: CartRepository>(cart: &CartAggregator<R>, output: &Output) {
    if output.is_json() {
        output.json(&serde_json::json!({
            "items": cart.items(),
            "total_item_count": cart.total_item_count(),
            "subtotal": cart.subtotal(),
            "persisted": cart.persisted_ok(),
        }));
        return;
    }

    output.header("Cart");
    if cart.items().is_empty() {
        output.info("Empty");
    }
    for line in cart.items() {
        let qty = format!("{}x", line.quantity);
        let price = line.price.display();
        let total = line.line_total().display();
        output.table_row(
            &[qty.as_str(), line.id.as_str(), line.name.as_str(), price.as_str(), total.as_str()],
            &[5, 10, 24, 10, 10],
        );
    }
    output.kv("items", &cart.total_item_count().to_string());
    output.kv("subtotal", &cart.subtotal().display());

    if let Some(e) = cart.last_save_error() {
        output.warn(&format!("Changes kept for this run only, could not be saved: {}", e));
    }
}

/// Parse a price in major units, accepting `,` as the decimal separator.
fn parse_price(raw: &str, currency: Currency) -> Result<Money> {
    let normalized = raw.trim().replace(',', ".");
    let amount: f64 = normalized
        .parse()
        .with_context(|| format!("Invalid price: {}", raw))?;

    match Money::try_from_decimal(amount, currency) {
        Some(price) if !price.is_negative() => Ok(price),
        _ => bail!("Price must be a non-negative amount: {}", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    fn test_context(dir: &std::path::Path) -> Context {
        let mut config = CliConfig::default();
        config.storage.dir = dir.join("store").display().to_string();
        Context {
            config,
            output: Output::new(true),
            cwd: dir.to_path_buf(),
        }
    }

    fn add_args(id: &str, name: &str, price: &str) -> AddArgs {
        AddArgs {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("18.90", Currency::BRL).unwrap().amount_cents, 1890);
        assert_eq!(parse_price(" 32,90 ", Currency::BRL).unwrap().amount_cents, 3290);
        assert!(parse_price("-1", Currency::BRL).is_err());
        assert!(parse_price("abc", Currency::BRL).is_err());
        assert!(parse_price("NaN", Currency::BRL).is_err());
    }

    #[test]
    fn test_commands_share_persisted_cart() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());

        add(add_args("A", "Burger", "18.90"), &ctx).unwrap();
        add(add_args("B", "Pizza", "32.90"), &ctx).unwrap();
        add(add_args("B", "Pizza", "32.90"), &ctx).unwrap();
        assert_eq!(ctx.open_cart().unwrap().subtotal().amount_cents, 8470);

        dec(DecArgs { id: "B".to_string(), all: false }, &ctx).unwrap();
        remove(RemoveArgs { id: "A".to_string() }, &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.items()[0].id, ItemId::new("B"));
    }

    #[test]
    fn test_clear_with_yes_and_checkout_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());

        add(add_args("A", "Burger", "18.90"), &ctx).unwrap();
        checkout(&ctx).unwrap();
        assert_eq!(ctx.open_cart().unwrap().total_item_count(), 1);

        clear(ClearArgs { yes: true }, &ctx).unwrap();
        assert!(ctx.open_cart().unwrap().items().is_empty());
        assert!(checkout(&ctx).is_err());
    }

    #[test]
    fn test_dec_unknown_item_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());
        dec(DecArgs { id: "ghost".to_string(), all: false }, &ctx).unwrap();
        show(&ctx).unwrap();
    }
}
