//! In-browser scoring form served at GET /
//!
//! A single embedded page for quick manual testing: paste wallet data,
//! score it via POST /score, inspect the JSON response.

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wallet Recognition Protocol - Layer 1</title>
  <style>
    body { font-family: Arial, sans-serif; background: #0b1224; color: #e9eef7; margin: 0; padding: 0; }
    header { padding: 20px; background: linear-gradient(135deg, #12284a, #0b1224); }
    h1 { margin: 0; font-size: 22px; letter-spacing: 0.5px; }
    main { padding: 20px; max-width: 960px; margin: 0 auto; }
    label { display: block; margin: 12px 0 6px; font-weight: bold; }
    input, textarea, select { width: 100%; padding: 10px; border-radius: 6px; border: 1px solid #1f2d52; background: #0e1830; color: #e9eef7; font-family: monospace; }
    textarea { min-height: 120px; }
    button { margin-top: 16px; padding: 12px 16px; background: #3b82f6; color: #fff; border: none; border-radius: 6px; cursor: pointer; font-weight: bold; }
    button:hover { background: #2563eb; }
    .card { background: #0f1a33; border: 1px solid #1f2d52; border-radius: 10px; padding: 16px 18px; box-shadow: 0 4px 16px rgba(0,0,0,0.25); }
    .row { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 14px; }
    pre { background: #0b1224; border: 1px solid #1f2d52; border-radius: 8px; padding: 12px; overflow-x: auto; }
    .error { color: #fca5a5; font-weight: bold; }
  </style>
</head>
<body>
  <header>
    <h1>Wallet Recognition Protocol &mdash; Layer 1 (Solana-first)</h1>
    <p>Paste wallet data, score locally via this server (POST /score).</p>
  </header>
  <main>
    <div class="card">
      <form id="score-form">
        <div class="row">
          <div>
            <label for="address">Wallet Address</label>
            <input id="address" name="address" value="4Nd1mY7R5..." required />
          </div>
          <div>
            <label for="chain">Chain</label>
            <select id="chain" name="chain">
              <option value="Solana" selected>Solana</option>
              <option value="Ethereum">Ethereum</option>
              <option value="Polygon">Polygon</option>
              <option value="Other">Other</option>
            </select>
          </div>
        </div>
        <div class="row">
          <div>
            <label for="last_active">Last Active (days ago)</label>
            <input id="last_active" name="last_active" type="number" value="3" min="0" />
          </div>
          <div>
            <label for="tx_count">Total Tx Count</label>
            <input id="tx_count" name="tx_count" type="number" value="120" min="0" />
          </div>
        </div>
        <label for="tokens">Tokens (JSON array)</label>
        <textarea id="tokens">[
  { "symbol": "SOL", "amount": 12.5, "usd_value": 2600 },
  { "symbol": "USDC", "amount": 500, "usd_value": 500 },
  { "symbol": "BONK", "amount": 1500000, "usd_value": 800 }
]</textarea>
        <label for="nfts">NFTs (JSON array)</label>
        <textarea id="nfts">[
  { "collection": "Degods", "token_id": "5", "estimated_value_usd": 2500 },
  { "collection": "OkayBears", "token_id": "42", "estimated_value_usd": 320 }
]</textarea>
        <button type="submit">Score Wallet</button>
      </form>
      <div id="status" class="error" style="margin-top:10px;"></div>
      <h3>Response</h3>
      <pre id="response">Submit the form to see results.</pre>
    </div>
  </main>
  <script>
    const form = document.getElementById('score-form');
    const statusEl = document.getElementById('status');
    const responseEl = document.getElementById('response');

    function parseJsonField(id) {
      const raw = document.getElementById(id).value.trim();
      if (!raw) { return []; }
      try { return JSON.parse(raw); }
      catch (err) { throw new Error(`Invalid JSON in ${id}: ${err.message}`); }
    }

    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      statusEl.textContent = '';
      responseEl.textContent = 'Loading...';
      try {
        const payload = {
          address: document.getElementById('address').value.trim(),
          chain: document.getElementById('chain').value,
          last_active_days_ago: Number(document.getElementById('last_active').value) || 0,
          total_tx_count: Number(document.getElementById('tx_count').value) || 0,
          tokens: parseJsonField('tokens'),
          nfts: parseJsonField('nfts'),
        };
        const res = await fetch('/score', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
        const body = await res.json();
        if (!res.ok) {
          statusEl.textContent = body.error || 'Request failed';
          responseEl.textContent = JSON.stringify(body, null, 2);
          return;
        }
        responseEl.textContent = JSON.stringify(body, null, 2);
      } catch (err) {
        statusEl.textContent = err.message;
        responseEl.textContent = 'Error';
      }
    });
  </script>
</body>
</html>
"#;
