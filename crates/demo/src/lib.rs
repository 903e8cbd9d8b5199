//! Scripted walkthrough of a small store.
//!
//! Builds a three-product catalog, registers two customers and an
//! administrator, runs a few purchases and a restock, and writes every notice
//! plus the final state to the given writer.

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use serde::Serialize;

use minimart_accounts::{Administrator, Customer, User};
use minimart_catalog::{Product, ProductHandle};
use minimart_core::{DiscountRate, DomainError, Money, UserIdSequence, lock};
use minimart_events::{Event, Notice, Outcome};
use minimart_store::Store;

const BANNER_WIDTH: usize = 60;

/// Everything the walkthrough built, for inspection after the run.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub store: Store,
    pub ana: Arc<Mutex<Customer>>,
    pub juan: Arc<Mutex<Customer>>,
    pub laura: Arc<Mutex<Administrator>>,
    /// Every notice line written, in order.
    pub notices: Vec<String>,
}

struct Reporter<'a, W: Write> {
    out: &'a mut W,
    lines: Vec<String>,
}

impl<'a, W: Write> Reporter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self {
            out,
            lines: Vec::new(),
        }
    }

    fn notice<N: Notice + Serialize>(&mut self, notice: &N) -> anyhow::Result<()> {
        let marker = match notice.outcome() {
            Outcome::Success => "OK",
            Outcome::Failure => "FAILED",
        };
        let payload = serde_json::to_string(notice)?;
        tracing::debug!(event_type = notice.event_type(), %payload, "notice");
        let line = format!("[{marker}] {notice}");
        writeln!(self.out, "{line}")?;
        self.lines.push(line);
        Ok(())
    }

    fn banner(&mut self, title: &str) -> anyhow::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "\n{rule}\n{title}\n{rule}")?;
        Ok(())
    }

    fn text(&mut self, text: impl core::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

fn product(store: &Store, code: &str) -> anyhow::Result<ProductHandle> {
    store
        .find_product(code)
        .ok_or_else(DomainError::not_found)
        .with_context(|| format!("product {code} is not in the catalog"))
}

/// Run the walkthrough, writing human-readable output to `out`.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<ScenarioOutcome> {
    let mut report = Reporter::new(out);
    report.banner("DEMO: Tech Store")?;

    let mut store = Store::new("Tech Store");
    for item in [
        Product::new("P001", "Laptop", Money::from_units(800)).with_stock(5),
        Product::new("P002", "Mouse", Money::from_units(25)).with_stock(20),
        Product::new("P003", "Keyboard", Money::from_units(60)).with_stock(10),
    ] {
        let added = store.add_product(item.into_handle())?;
        report.notice(&added)?;
    }

    let ids = UserIdSequence::new();
    let ana =
        Customer::new(&ids, "Ana", "ana@email.com", DiscountRate::from_fraction(0.10)).into_handle();
    let juan = Customer::new(&ids, "Juan", "juan@email.com", DiscountRate::from_fraction(0.05))
        .into_handle();
    let laura = Administrator::new(&ids, "Laura", "laura@email.com", "Inventory").into_handle();

    report.notice(&store.register_user(ana.clone()))?;
    report.notice(&store.register_user(juan.clone()))?;
    report.notice(&store.register_user(laura.clone()))?;

    report.text(format!("\n{}", store.render_catalog()))?;
    report.text(format!("\n{}", store.render_users()))?;

    report.banner("PURCHASES")?;
    let laptop = product(&store, "P001")?;
    let mouse = product(&store, "P002")?;
    let keyboard = product(&store, "P003")?;

    let bought = lock(&ana).purchase(&mut lock(&laptop));
    report.notice(&bought)?;
    let bought = lock(&juan).purchase(&mut lock(&mouse));
    report.notice(&bought)?;
    let bought = lock(&ana).purchase(&mut lock(&mouse));
    report.notice(&bought)?;
    let bought = lock(&laura).purchase(&mut lock(&keyboard));
    report.notice(&bought)?;

    report.banner("RESTOCK")?;
    let restocked = lock(&laura).restock(&mut lock(&laptop), 3)?;
    report.notice(&restocked)?;

    report.banner("FINAL STATE")?;
    report.text(store.render_catalog())?;
    {
        let ana = lock(&ana);
        report.text(format!("\nSpent by {}: {}", ana.name(), ana.total_spent()))?;
        report.text(format!("History of {}: {:?}", ana.name(), ana.history()))?;
    }
    report.text(format!("\nProducts in store: {}", store.size()))?;
    report.text(&store)?;

    let notices = report.lines;
    Ok(ScenarioOutcome {
        store,
        ana,
        juan,
        laura,
        notices,
    })
}
