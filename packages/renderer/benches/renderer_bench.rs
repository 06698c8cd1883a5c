use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sitebuilder_renderer::{render_canvas, render_page, PageMeta, RenderOptions};
use sitebuilder_schema::{create_node, templates, NodeType, PageSchema};

fn render_landing_published(c: &mut Criterion) {
    let Some(page) = templates::template("landing") else {
        return;
    };
    let meta = PageMeta::new("Landing");
    let options = RenderOptions::published();

    c.bench_function("render_landing_published", |b| {
        b.iter(|| render_page(black_box(page.view()), &meta, &options))
    });
}

fn render_landing_editable(c: &mut Criterion) {
    let Some(page) = templates::template("landing") else {
        return;
    };
    let selected = page.root_nodes[1].id.clone();
    let options = RenderOptions::editable().with_selection(Some(&selected), None);

    c.bench_function("render_landing_editable", |b| {
        b.iter(|| render_canvas(black_box(&page.root_nodes), &options))
    });
}

fn render_wide_grid(c: &mut Criterion) {
    let mut grid = create_node(NodeType::Grid);
    for i in 0..500 {
        let mut text = create_node(NodeType::Text);
        text.props.insert("text".into(), format!("Item {} <with> \"markup\"\nsecond line", i).into());
        grid.children.push(text);
    }
    let page = PageSchema::new(vec![grid]);
    let options = RenderOptions::published().with_responsive(true);

    c.bench_function("render_wide_grid", |b| {
        b.iter(|| render_page(black_box(page.view()), &PageMeta::new("Grid"), &options))
    });
}

criterion_group!(benches, render_landing_published, render_landing_editable, render_wide_grid);
criterion_main!(benches);
