use crate::models::{PunchEvent, TodayResponse};
use chrono::{Local, TimeZone};

pub fn render_index(today: &TodayResponse) -> String {
    let last = today
        .summary
        .last_kind
        .map(|kind| kind.label())
        .unwrap_or("No punches yet");

    INDEX_HTML
        .replace("{{DATE}}", &today.date)
        .replace("{{WORKED}}", &today.summary.worked)
        .replace("{{BREAK}}", &today.summary.break_time)
        .replace("{{COUNT}}", &today.summary.count.to_string())
        .replace("{{LAST}}", last)
        .replace("{{ACTIONS}}", &render_actions(today))
        .replace("{{EVENTS}}", &render_events(&today.events))
}

fn render_actions(today: &TodayResponse) -> String {
    today
        .next_actions
        .iter()
        .map(|kind| {
            format!(
                r#"<form method="post" action="/punch/{kind}"><button class="punch {kind}" type="submit">{label}</button></form>"#,
                kind = kind.as_str(),
                label = kind.label(),
            )
        })
        .collect()
}

fn render_events(events: &[PunchEvent]) -> String {
    if events.is_empty() {
        return r#"<li class="empty">Nothing recorded today.</li>"#.to_string();
    }

    events
        .iter()
        .map(|event| {
            format!(
                r#"<li><span class="tag {kind}">{label}</span><time>{time}</time></li>"#,
                kind = event.kind.as_str(),
                label = event.kind.label(),
                time = clock_time(event.timestamp),
            )
        })
        .collect()
}

fn clock_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Ponto</title>
  <style>
    :root {
      --bg-1: #65e33f;
      --bg-2: #387d23;
      --ink: #1f2a1c;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 50px rgba(0, 0, 0, 0.12);
      --clock-in: #00a96e;
      --break-start: #d9b36c;
      --break-end: #3b82f6;
      --clock-out: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, var(--bg-1) 0%, var(--bg-2) 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .clock {
      font-size: 2.6rem;
      font-variant-numeric: tabular-nums;
      margin: 4px 0 0;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      background: #f9fafb;
      border-radius: 16px;
      padding: 16px;
    }

    .stat span {
      display: block;
      font-size: 0.85rem;
      color: #5f6b5a;
    }

    .stat strong {
      font-size: 1.5rem;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .actions form {
      margin: 0;
    }

    button.punch {
      border: none;
      border-radius: 14px;
      padding: 14px 22px;
      font-size: 1rem;
      color: #fff;
      cursor: pointer;
    }

    .clock_in { background: var(--clock-in); }
    .break_start { background: var(--break-start); }
    .break_end { background: var(--break-end); }
    .clock_out { background: var(--clock-out); }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    li {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 14px;
      border-radius: 12px;
      background: #f9fafb;
    }

    li.empty {
      color: #5f6b5a;
      justify-content: center;
    }

    .tag {
      color: #fff;
      font-weight: bold;
      font-size: 0.8rem;
      border-radius: 999px;
      padding: 4px 10px;
      text-transform: uppercase;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Punch clock</h1>
      <p class="clock" id="clock">--:--:--</p>
      <p>{{DATE}} &middot; last punch: <strong>{{LAST}}</strong></p>
    </header>

    <section class="stats">
      <div class="stat"><span>Worked</span><strong>{{WORKED}}</strong></div>
      <div class="stat"><span>Break</span><strong>{{BREAK}}</strong></div>
      <div class="stat"><span>Records</span><strong>{{COUNT}} today</strong></div>
    </section>

    <section class="actions">{{ACTIONS}}</section>

    <section>
      <h2>Today</h2>
      <ul>{{EVENTS}}</ul>
    </section>
  </main>

  <script>
    const clock = document.getElementById('clock');
    const tick = () => {
      clock.textContent = new Date().toLocaleTimeString([], { hour12: false });
    };
    tick();
    setInterval(tick, 1000);
  </script>
</body>
</html>
"#;
