use std::path::Path;

/// A filing page shaped like a 10-K: a table of contents that repeats the statement titles,
/// then the statements themselves with scale notes and spacer cells.
pub const FILING: &str = r#"<html><body>
<div><span>Table of Contents</span></div>
<table>
  <tr><td>Consolidated Statements of Income</td><td>45</td></tr>
  <tr><td>Consolidated Balance Sheets</td><td>47</td></tr>
</table>
<p>Item 8. Financial Statements</p>
<div>
  <p><b>NVIDIA Corporation and Subsidiaries</b></p>
  <p><b>Consolidated Balance Sheets</b></p>
  <p>(in millions, except par value)</p>
  <p>(in millions)</p>
  <table style="border-collapse:collapse">
    <tr><td style="width:40%"></td><td></td><td></td><td></td><td></td><td></td></tr>
    <tr><td></td><td colspan="2" style="text-align:center">January 28, 2024</td><td>&nbsp;</td><td colspan="2">January 29, 2023</td></tr>
    <tr><td>Assets</td><td>Assets</td><td>Assets</td><td>Assets</td><td>Assets</td><td>Assets</td></tr>
    <tr><td>Cash and cash equivalents</td><td>$</td><td>7,280</td><td></td><td>$</td><td>3,389</td></tr>
    <tr><td></td><td></td><td></td><td></td><td></td><td></td></tr>
    <tr><td>Accounts receivable, net</td><td></td><td>9,999</td><td></td><td></td><td>3,827</td></tr>
    <tr><td>Liabilities</td><td>Liabilities</td><td>Liabilities</td><td>Liabilities</td><td>Liabilities</td><td>Liabilities</td></tr>
    <tr><td>Accounts payable</td><td>$</td><td>2,699</td><td></td><td>$</td><td>1,193</td></tr>
  </table>
</div>
</body></html>"#;

pub fn write_fixture(path: &Path, html: &str) -> std::io::Result<()> {
    std::fs::write(path, html)
}
