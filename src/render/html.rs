use crate::status::ReportData;

/// Render the self-contained HTML dashboard (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from
/// JS template literals (e.g., `${x}`), which would conflict with Rust
/// formatting.
pub fn render_html_report(data: &ReportData) -> crate::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Freeboard</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: #fafafa; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; background: white; display: flex; align-items: center; gap: 16px; }
  header h1 { font-size: 18px; margin: 0; }
  .summary { display: flex; gap: 8px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .spacer { flex: 1; }
  button { padding: 6px 10px; border: 1px solid #ccc; border-radius: 6px; background: white; cursor: pointer; }
  button:hover { background: #f3f3f3; }

  .container { display: flex; align-items: flex-start; }
  .sidebar { width: 320px; border-right: 1px solid #ddd; padding: 12px; background: white; min-height: calc(100vh - 54px); }
  .main { flex: 1; padding: 12px 16px; }

  .banner { background: #fff6d9; border: 1px solid #e8d48a; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px; font-size: 14px; }
  .banner div + div { margin-top: 4px; }

  h2 { font-size: 15px; color: #555; margin: 16px 0 8px; text-transform: uppercase; letter-spacing: 0.04em; }
  .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 10px; }
  .card { border: 1px solid #ddd; border-radius: 8px; padding: 10px 12px; background: white; }
  .card.busy { border-left: 4px solid #d9534f; }
  .card.free { border-left: 4px solid #4f9d69; }
  .who { font-weight: 600; margin-bottom: 2px; }
  .muted { color: #777; font-size: 13px; }
  .empty { color: #777; font-size: 14px; padding: 4px 0; }

  select { width: 100%; padding: 6px 8px; border: 1px solid #ddd; border-radius: 6px; margin-bottom: 10px; }
  .slot { border: 1px solid #e3e3e3; border-radius: 6px; padding: 8px 10px; margin-bottom: 8px; background: #f7fbff; }
  .slot b { font-variant-numeric: tabular-nums; }
</style>
</head>
<body>
<header>
  <h1>Freeboard</h1>
  <div class="summary" id="summary"></div>
  <div class="spacer"></div>
  <button id="refresh" title="Reload the report">Refresh</button>
</header>

<div class="container">
  <div class="sidebar">
    <h2>Personal view</h2>
    <select id="who"></select>
    <div id="personal"></div>
  </div>

  <div class="main">
    <div class="banner" id="banner" style="display:none;"></div>

    <h2>Busy</h2>
    <div class="cards" id="busyCards"></div>
    <div class="empty" id="busyEmpty" style="display:none;">Nobody is busy right now.</div>

    <h2>Free</h2>
    <div class="cards" id="freeCards"></div>
    <div class="empty" id="freeEmpty" style="display:none;">Nobody is free right now.</div>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderSummary() {
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill"><b>${escapeHtml(DATA.weekday)}</b> ${escapeHtml(DATA.time)}</span>
    <span class="pill">busy: <b>${DATA.busy.length}</b></span>
    <span class="pill">free: <b>${DATA.free.length}</b></span>
    <span class="pill muted">generated ${escapeHtml(DATA.generated_at)}</span>
  `;
}

function renderBanner() {
  const el = document.getElementById("banner");
  if (!DATA.diagnostics.length) return;
  el.style.display = "block";
  el.innerHTML = DATA.diagnostics.map(d => `<div>&#9888; ${escapeHtml(d)}</div>`).join("");
}

function renderBoard() {
  const busy = document.getElementById("busyCards");
  busy.innerHTML = "";
  for (const entry of DATA.busy) {
    const card = document.createElement("div");
    card.className = "card busy";
    card.innerHTML = `
      <div class="who">${escapeHtml(entry.person)}</div>
      <div>${escapeHtml(entry.activity || "Busy")}</div>
      <div class="muted">until ${escapeHtml(entry.until)} &middot; @ ${escapeHtml(entry.location)}</div>
    `;
    busy.appendChild(card);
  }
  document.getElementById("busyEmpty").style.display = DATA.busy.length ? "none" : "block";

  const free = document.getElementById("freeCards");
  free.innerHTML = "";
  for (const entry of DATA.free) {
    const note = entry.next_start
      ? `free until ${escapeHtml(entry.next_start)}`
      : "free for the rest of the day";
    const card = document.createElement("div");
    card.className = "card free";
    card.innerHTML = `
      <div class="who">${escapeHtml(entry.person)}</div>
      <div class="muted">${note}</div>
    `;
    free.appendChild(card);
  }
  document.getElementById("freeEmpty").style.display = DATA.free.length ? "none" : "block";
}

function renderPersonal() {
  const who = document.getElementById("who").value;
  const el = document.getElementById("personal");
  el.innerHTML = "";

  const blocks = DATA.days[who] || [];
  if (!blocks.length) {
    el.innerHTML = `<div class="empty">No scheduled blocks for you today!</div>`;
    return;
  }
  for (const b of blocks) {
    const div = document.createElement("div");
    div.className = "slot";
    const where = b.location ? ` (@ ${escapeHtml(b.location)})` : "";
    div.innerHTML = `<b>${escapeHtml(b.start)} - ${escapeHtml(b.end)}</b><br>${escapeHtml(b.activity)}${where}`;
    el.appendChild(div);
  }
}

function initPersonal() {
  const select = document.getElementById("who");
  for (const name of DATA.people) {
    const opt = document.createElement("option");
    opt.value = name;
    opt.textContent = name;
    select.appendChild(opt);
  }
  select.addEventListener("change", renderPersonal);
}

document.getElementById("refresh").onclick = () => location.reload();

renderSummary();
renderBanner();
renderBoard();
initPersonal();
renderPersonal();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{BusyEntry, FreeEntry};
    use std::collections::BTreeMap;

    #[test]
    fn embeds_report_data_as_json() {
        let data = ReportData {
            weekday: "Monday".to_string(),
            time: "09:45".to_string(),
            generated_at: "2026-08-06 09:45:00".to_string(),
            busy: vec![BusyEntry {
                person: "Alice".to_string(),
                activity: "Lecture".to_string(),
                until: "10:00".to_string(),
                location: "Hall B".to_string(),
            }],
            free: vec![FreeEntry {
                person: "Bob".to_string(),
                next_start: None,
            }],
            people: vec!["Alice".to_string(), "Bob".to_string()],
            days: BTreeMap::new(),
            diagnostics: vec![],
        };

        let html = render_html_report(&data).unwrap();
        assert!(!html.contains("__DATA__"));
        assert!(html.contains("\"person\":\"Alice\""));
        assert!(html.contains("\"next_start\":null"));
    }
}
