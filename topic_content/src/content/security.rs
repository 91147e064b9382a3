//! Security and authentication.

use super::TopicContent;

pub const JSON_WEB_TOKENS: TopicContent = TopicContent::new(
    "json-web-tokens",
    "JSON Web Tokens (JWT)",
    r#"<h3>Definition</h3>
<p>A JWT is a compact, URL-safe token made of three base64url parts: <code>header.payload.signature</code>.</p>
<ul>
  <li>The header names the signing algorithm (HS256, RS256, ES256).</li>
  <li>The payload carries claims such as <code>sub</code>, <code>exp</code> and <code>iat</code>.</li>
  <li>The signature lets any holder of the key verify the token was not modified.</li>
</ul>
<h3>Pitfalls</h3>
<ul>
  <li>Payloads are encoded, not encrypted.</li>
  <li>Revocation is hard; keep expiry short and use refresh tokens.</li>
  <li>Always pin the expected algorithm; never accept <code>alg: none</code>.</li>
</ul>"#,
);

pub const OAUTH_AND_OPENID_CONNECT: TopicContent = TopicContent::new(
    "oauth-and-openid-connect",
    "OAuth 2.0 & OpenID Connect",
    r#"<h3>OAuth 2.0</h3>
<p>A delegated <strong>authorization</strong> framework: a client obtains an access token to call an API on behalf of a resource owner.</p>
<ul>
  <li>Authorization Code with PKCE: browser and mobile apps.</li>
  <li>Client Credentials: service-to-service.</li>
  <li>Device Code: input-constrained devices.</li>
</ul>
<h3>OpenID Connect</h3>
<p>An <strong>authentication</strong> layer on top of OAuth 2.0 that adds the ID token (a JWT describing the user) and the userinfo endpoint.</p>"#,
);

pub const HASHING_VS_ENCRYPTION: TopicContent = TopicContent::new(
    "hashing-vs-encryption",
    "Hashing vs Encryption",
    r#"<h3>Comparison</h3>
<table>
  <tr><th></th><th>Hashing</th><th>Encryption</th></tr>
  <tr><td>Reversible</td><td>No</td><td>Yes, with the key</td></tr>
  <tr><td>Output size</td><td>Fixed</td><td>Grows with input</td></tr>
  <tr><td>Use</td><td>Integrity, password storage</td><td>Confidentiality</td></tr>
</table>
<p>Store passwords with a slow, salted hash such as bcrypt, scrypt or Argon2. Symmetric encryption (AES-GCM) is fast; asymmetric encryption (RSA, ECC) solves key distribution.</p>"#,
);

pub const HTTPS_AND_TLS: TopicContent = TopicContent::new(
    "https-and-tls",
    "HTTPS & TLS Handshake",
    r#"<h3>TLS 1.3 handshake</h3>
<ol>
  <li>ClientHello: supported ciphers and a key share.</li>
  <li>ServerHello: chosen cipher, its key share, certificate and Finished.</li>
  <li>Both sides derive session keys from the (EC)DHE exchange; application data flows after one round trip.</li>
</ol>
<ul>
  <li>The certificate chain proves the server identity against a trusted CA.</li>
  <li>Ephemeral key exchange gives forward secrecy.</li>
  <li>0-RTT resumption trades replay safety for latency.</li>
</ul>"#,
);

pub const CORS: TopicContent = TopicContent::new(
    "cors",
    "CORS",
    r#"<h3>Definition</h3>
<p>Cross-Origin Resource Sharing lets a server tell browsers which other origins may read its responses, relaxing the same-origin policy.</p>
<ul>
  <li>Simple requests carry an <code>Origin</code> header; the server answers with <code>Access-Control-Allow-Origin</code>.</li>
  <li>Non-simple requests trigger an <code>OPTIONS</code> preflight.</li>
  <li>Credentials require an explicit origin, never the wildcard.</li>
</ul>
<p>CORS is enforced by browsers only; it is not a server-side access control.</p>"#,
);

pub const SQL_INJECTION_AND_XSS: TopicContent = TopicContent::new(
    "sql-injection-and-xss",
    "SQL Injection & XSS",
    r#"<h3>SQL injection</h3>
<p>Untrusted input is concatenated into a query and changes its meaning.</p>
<pre><code class="language-java">// vulnerable
"SELECT * FROM users WHERE name = '" + name + "'"
// safe
PreparedStatement ps = conn.prepareStatement("SELECT * FROM users WHERE name = ?");</code></pre>
<h3>Cross-site scripting</h3>
<p>Untrusted input is rendered as markup and runs script in another user's browser.</p>
<ul>
  <li>Escape output by context (HTML, attribute, URL, JS).</li>
  <li>Use a Content Security Policy.</li>
  <li>Mark session cookies <code>HttpOnly</code>.</li>
</ul>"#,
);

pub const ALL: &[TopicContent] = &[
    JSON_WEB_TOKENS,
    OAUTH_AND_OPENID_CONNECT,
    HASHING_VS_ENCRYPTION,
    HTTPS_AND_TLS,
    CORS,
    SQL_INJECTION_AND_XSS,
];
