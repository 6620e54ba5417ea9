// benches/ledger.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use puca_ledger::config::consts::TRANSACTION_START;
use puca_ledger::specs::ledger;

fn label_value(label: &str, value: &str) -> String {
    format!(r#"<div class="label">{label}</div><div class="value">{value}</div>"#)
}

/// Synthetic ledger page with `n` trade blocks, shaped like the live markup.
fn make_page(n: usize) -> String {
    let mut page = String::from("<html><body>");
    page.push_str(TRANSACTION_START); // column header row
    for i in 0..n {
        page.push_str(TRANSACTION_START);
        let notes = format!(
            "Package <a href='/trades/show/{0}'>{0}</a>: <a href='/cards/show/{1}?f=0'>Card {i}</a>",
            1000 + i,
            2000 + i,
        );
        let block = [
            label_value("SENDER", "<a href='/profiles/show/129317'>John Doe</a>"),
            label_value("TYPE", "TRADE"),
            label_value("NOTES", &notes),
            label_value("POINTS", "50"),
            label_value("RUNNING", "<span class='positive'>1,050"),
            label_value("RECEIVER", "<a href='/profiles/show/42'>Jane Roe</a>"),
            label_value("DATE", "2020-01-15 10:30:00"),
        ]
        .join("\n");
        page.push_str(&block);
    }
    page.push_str("</body></html>");
    page
}

fn bench_ledger(c: &mut Criterion) {
    let page = make_page(200);

    c.bench_function("parse_page_200", |b| {
        b.iter(|| {
            let rows: usize = ledger::transaction_blocks(black_box(&page))
                .map(|block| ledger::parse_transaction(block).unwrap())
                .map(|tx| tx.csv_row().len())
                .sum();
            black_box(rows)
        })
    });

    let block = make_page(1);
    let block = ledger::transaction_blocks(&block).next().unwrap();

    c.bench_function("extract_fields_one_block", |b| {
        b.iter(|| {
            let fields = ledger::extract_fields(black_box(block)).unwrap();
            black_box(fields.len())
        })
    });
}

criterion_group!(benches, bench_ledger);
criterion_main!(benches);
