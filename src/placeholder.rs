//! Vector graphic sent when the endpoint is triggered without an upload.

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

pub fn render_svg(timestamp: &str) -> String {
    format!(
        r##"<svg width="{WIDTH}" height="{HEIGHT}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#667eea;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#764ba2;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="{WIDTH}" height="{HEIGHT}" fill="url(#grad)"/>
  <text x="400" y="160" font-family="Arial, sans-serif" font-size="32" font-weight="bold" fill="white" text-anchor="middle">🤖 Automated Photo</text>
  <text x="400" y="220" font-family="Arial, sans-serif" font-size="20" fill="white" text-anchor="middle">{timestamp}</text>
  <text x="400" y="260" font-family="Arial, sans-serif" font-size="16" fill="rgba(255,255,255,0.8)" text-anchor="middle">Sent via Cron-job.org</text>
</svg>"##,
        timestamp = escape_text(timestamp),
    )
}

pub fn cron_caption(timestamp: &str) -> String {
    format!("🤖 Auto-sent via cron at {timestamp}")
}

pub fn upload_caption(timestamp: &str) -> String {
    format!("📸 Sent at {timestamp}")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
