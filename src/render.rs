//! HTML for the two pool pages. Bootstrap does the styling.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Local;

use crate::scoring::Comparison;

const GOOGLE_FONTS: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const CUSTOM_CSS: &str = r#"<style>
  :root { --md-primary: #1976d2; --md-primary-dark: #004ba0; --md-accent: #ff9800; }
  body { font-family: 'Roboto', sans-serif; }
  .card { border: none; border-radius: 1rem; box-shadow: 0 4px 12px rgba(0,0,0,.1); }
  .card-header { background: var(--md-primary); color: #fff; font-weight: 500; border-radius: 1rem 1rem 0 0; }
  .btn-md { border-radius: 2rem; font-weight: 500; }
  .table thead th { background: var(--md-primary-dark); color: #fff; }
  .table-success { background: #c8e6c9 !important; }
</style>"#;

pub const INDEX_ROUTE: &str = "/";
pub const COMPARISON_ROUTE: &str = "/comparativo";

#[derive(Debug, Clone)]
pub struct PageContext {
    pub season: String,
    pub generated_at: String,
}

impl PageContext {
    pub fn now(season: &str) -> Self {
        Self {
            season: season.to_string(),
            generated_at: Local::now().format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn open_page(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r#"<!doctype html>
<html lang="pt-br">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="preconnect" href="https://fonts.gstatic.com">
    <link href="{GOOGLE_FONTS}" rel="stylesheet">
    <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
    {CUSTOM_CSS}
  </head>
  <body class="bg-light">
    <div class="container py-5">
"#,
        title = escape(title),
    );
}

fn close_page(out: &mut String, ctx: &PageContext) {
    let _ = write!(
        out,
        r#"      <p class="text-muted small text-center mt-4">Atualizado em {}</p>
    </div>
  </body>
</html>
"#,
        escape(&ctx.generated_at)
    );
}

/// Participant ranking next to the current table.
pub fn index_page(ctx: &PageContext, ranking: &[(String, usize)], standings: &[String]) -> String {
    let mut out = String::new();
    open_page(
        &mut out,
        &format!("Ranking de Palpites - Brasileirão {}", ctx.season),
    );

    let _ = write!(
        out,
        r#"      <div class="d-flex justify-content-between align-items-center mb-4">
        <h1 class="fw-bold text-dark">Ranking de Palpites <small class="text-muted fs-5">{season}</small></h1>
        <a class="btn btn-md btn-primary shadow-sm" href="{COMPARISON_ROUTE}">Comparativo Detalhado</a>
      </div>
      <div class="row g-4">
        <div class="col-lg-7">
          <div class="card h-100">
            <div class="card-header">Ranking de Participantes</div>
            <div class="card-body p-0">
              <table class="table mb-0 table-sm align-middle">
                <thead><tr><th>#</th><th>Participante</th><th>Erro Total</th></tr></thead>
                <tbody>
"#,
        season = escape(&ctx.season),
    );
    for (idx, (participant, score)) in ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "                  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            idx + 1,
            escape(participant),
            score
        );
    }
    out.push_str(
        r#"                </tbody>
              </table>
            </div>
          </div>
        </div>
        <div class="col-lg-5">
          <div class="card h-100">
            <div class="card-header">Classificação Atual</div>
            <div class="card-body p-0">
              <table class="table mb-0 table-sm">
                <thead><tr><th>#</th><th>Time</th></tr></thead>
                <tbody>
"#,
    );
    for (idx, team) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "                  <tr><td>{}</td><td>{}</td></tr>",
            idx + 1,
            escape(team)
        );
    }
    out.push_str(
        r#"                </tbody>
              </table>
            </div>
          </div>
        </div>
      </div>
"#,
    );

    close_page(&mut out, ctx);
    out
}

/// One card per participant with the row-by-row comparison.
pub fn comparison_page(ctx: &PageContext, comparisons: &BTreeMap<String, Comparison>) -> String {
    let mut out = String::new();
    open_page(
        &mut out,
        &format!("Comparativo de Palpites - Brasileirão {}", ctx.season),
    );

    let _ = write!(
        out,
        r#"      <div class="d-flex justify-content-between align-items-center mb-4">
        <a class="btn btn-md btn-secondary shadow-sm" href="{INDEX_ROUTE}">&larr; Voltar</a>
        <h1 class="fw-bold text-dark flex-grow-1 text-center">Comparativo</h1>
        <div style="width:90px"></div>
      </div>
"#
    );

    for (participant, comparison) in comparisons {
        let _ = write!(
            out,
            r#"      <div class="card mb-5">
        <div class="card-header d-flex justify-content-between align-items-center">
          <span class="fw-semibold">{}</span>
          <span class="badge bg-primary rounded-pill">Erro: {}</span>
        </div>
        <div class="card-body p-0">
          <table class="table mb-0 table-sm align-middle">
            <thead><tr><th>Real</th><th>Time</th><th>Prevista</th><th>&Delta;</th></tr></thead>
            <tbody>
"#,
            escape(participant),
            comparison.total
        );
        for row in &comparison.rows {
            let class = if row.diff == 0 {
                r#" class="table-success""#
            } else {
                ""
            };
            let predicted = row
                .predicted
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "              <tr{class}><td>{}</td><td>{}</td><td>{predicted}</td><td>{}</td></tr>",
                row.real,
                escape(&row.team),
                row.diff
            );
        }
        out.push_str(
            r#"            </tbody>
          </table>
        </div>
      </div>
"#,
        );
    }

    close_page(&mut out, ctx);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ComparisonRow;

    fn ctx() -> PageContext {
        PageContext {
            season: "2025".to_string(),
            generated_at: "01/01/2025 10:00".to_string(),
        }
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn index_lists_ranking_in_order() {
        let ranking = vec![("Bia".to_string(), 3), ("Ana".to_string(), 9)];
        let standings = vec!["Flamengo".to_string(), "Palmeiras".to_string()];
        let html = index_page(&ctx(), &ranking, &standings);
        let bia = html.find("<td>Bia</td>").expect("Bia listed");
        let ana = html.find("<td>Ana</td>").expect("Ana listed");
        assert!(bia < ana);
        assert!(html.contains("<tr><td>2</td><td>Palmeiras</td></tr>"));
        assert!(html.contains(COMPARISON_ROUTE));
    }

    #[test]
    fn comparison_marks_exact_rows_and_dashes_missing() {
        let mut map = BTreeMap::new();
        map.insert(
            "<Zé>".to_string(),
            Comparison {
                rows: vec![
                    ComparisonRow {
                        team: "Bahia".to_string(),
                        real: 1,
                        predicted: Some(1),
                        diff: 0,
                    },
                    ComparisonRow {
                        team: "Vitória".to_string(),
                        real: 2,
                        predicted: None,
                        diff: 18,
                    },
                ],
                total: 18,
            },
        );
        let html = comparison_page(&ctx(), &map);
        assert!(html.contains("&lt;Zé&gt;"));
        assert!(html.contains("Erro: 18"));
        assert!(html.contains(r#"<tr class="table-success"><td>1</td><td>Bahia</td><td>1</td><td>0</td></tr>"#));
        assert!(html.contains("<tr><td>2</td><td>Vitória</td><td>-</td><td>18</td></tr>"));
    }
}
