//! Interactive calculator page
//!
//! A single embedded HTML document: symbol and expiry inputs, result
//! labels, and a 3-point range visualisation (lower bound, current price,
//! upper bound). The page posts to the JSON endpoint and renders whatever
//! comes back, so it stays a thin caller around the kernel.

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use super::AppState;

/// Build the form routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(form_handler))
}

/// GET / - The calculator page
async fn form_handler() -> impl IntoResponse {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Expected Move Calculator</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #1a1a2e; }
  h1 { font-size: 1.4rem; }
  form { display: grid; gap: 0.75rem; margin-bottom: 1.5rem; }
  label { font-weight: 600; }
  input { padding: 0.5rem; font-size: 1rem; border: 1px solid #ccc; border-radius: 4px; }
  button { padding: 0.6rem; font-size: 1rem; background: #16425b; color: white; border: none; border-radius: 4px; cursor: pointer; }
  button:hover { background: #1d5a7a; }
  #message { padding: 0.75rem; border-radius: 4px; display: none; }
  #message.warning { display: block; background: #fff4d6; border: 1px solid #e0b84a; }
  #message.error { display: block; background: #fde2e2; border: 1px solid #d66; }
  #results { display: none; }
  #results dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem; }
  #results dt { font-weight: 600; }
  .headline { font-size: 1.2rem; font-weight: 700; margin: 0.75rem 0; }
  .up { color: #1a7a4a; }
  .down { color: #b23a3a; }
  .disclosure { font-size: 0.8rem; color: #666; margin-top: 2rem; }
</style>
</head>
<body>
<h1>&#128200; Stock Expected Move Calculator (Binary Event)</h1>

<form id="calc-form">
  <label for="symbol">Stock Symbol (e.g., AAPL)</label>
  <input id="symbol" name="symbol" type="text" value="AAPL" required>
  <label for="expiration">Option Expiration Date</label>
  <input id="expiration" name="expiration" type="date" required>
  <button type="submit">Calculate Expected Move</button>
</form>

<div id="message"></div>

<div id="results">
  <h2 id="results-title"></h2>
  <dl>
    <dt>Spot Price</dt><dd id="spot"></dd>
    <dt>ATM Strike</dt><dd id="atm-strike"></dd>
    <dt>ATM Straddle</dt><dd id="straddle"></dd>
    <dt>1st OTM Strangle</dt><dd id="strangle"></dd>
  </dl>
  <p class="headline">&#128202; Expected Move &asymp; <span id="expected-move"></span></p>
  <p><span class="up">Upside target: <span id="upper-bound"></span></span><br>
     <span class="down">Downside target: <span id="lower-bound"></span></span></p>
  <svg id="range-chart" viewBox="0 0 600 160" width="100%" role="img"
       aria-label="Expected move range: lower bound, current price, upper bound"></svg>
</div>

<p class="disclosure">Premiums are last traded prices, which may be stale for
illiquid strikes. This tool is for educational purposes only and is not
investment advice.</p>

<script>
const form = document.getElementById('calc-form');
const message = document.getElementById('message');
const results = document.getElementById('results');

document.getElementById('expiration').valueAsDate = new Date();

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  message.className = '';
  results.style.display = 'none';

  const payload = {
    symbol: document.getElementById('symbol').value,
    expiration: document.getElementById('expiration').value,
  };

  let response;
  try {
    response = await fetch('/api/v1/expected-move', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload),
    });
  } catch (err) {
    showMessage('error', 'Request failed: ' + err.message);
    return;
  }

  const body = await response.json();
  if (!response.ok) {
    showMessage(body.severity === 'warning' ? 'warning' : 'error', body.message);
    return;
  }
  render(body);
});

function showMessage(kind, text) {
  message.className = kind;
  message.textContent = text;
}

function usd(value) {
  return '$' + value.toFixed(2);
}

function render(r) {
  document.getElementById('results-title').textContent =
    'Results for ' + r.symbol + ' (Exp: ' + r.expiration + ')';
  document.getElementById('spot').textContent = usd(r.spot);
  document.getElementById('atm-strike').textContent = r.atmStrike;
  document.getElementById('straddle').textContent = usd(r.straddle);
  document.getElementById('strangle').textContent =
    usd(r.strangle) + ' (Call ' + r.otmCallStrike + ', Put ' + r.otmPutStrike + ')';
  document.getElementById('expected-move').textContent = usd(r.expectedMove);
  document.getElementById('upper-bound').textContent = usd(r.upperBound);
  document.getElementById('lower-bound').textContent = usd(r.lowerBound);
  drawRange(r.lowerBound, r.spot, r.upperBound);
  results.style.display = 'block';
}

// Three-point line: lower bound, current price, upper bound.
function drawRange(lower, spot, upper) {
  const svg = document.getElementById('range-chart');
  const points = [
    { label: 'Lower Bound', value: lower, x: 80 },
    { label: 'Current Price', value: spot, x: 300 },
    { label: 'Upper Bound', value: upper, x: 520 },
  ];
  const min = lower, max = upper;
  const y = (v) => max === min ? 80 : 130 - 100 * (v - min) / (max - min);

  let marks = '<polyline fill="none" stroke="#16425b" stroke-width="2" points="'
    + points.map(p => p.x + ',' + y(p.value)).join(' ') + '"/>';
  for (const p of points) {
    marks += '<circle cx="' + p.x + '" cy="' + y(p.value) + '" r="5" fill="#16425b"/>'
      + '<text x="' + p.x + '" y="150" text-anchor="middle" font-size="12">' + p.label + '</text>'
      + '<text x="' + p.x + '" y="' + (y(p.value) - 12) + '" text-anchor="middle" font-size="12">'
      + usd(p.value) + '</text>';
  }
  svg.innerHTML = marks;
}
</script>
</body>
</html>
"##;
