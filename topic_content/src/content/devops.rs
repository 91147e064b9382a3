//! DevOps and infrastructure.

use super::TopicContent;

pub const CI_CD_PIPELINES: TopicContent = TopicContent::new(
    "ci-cd-pipelines",
    "CI/CD Pipelines",
    r#"<h3>Definition</h3>
<ul>
  <li><strong>Continuous Integration</strong>: every change is merged often and verified by an automated build and test run.</li>
  <li><strong>Continuous Delivery</strong>: every green build is releasable; production deploys are a button press.</li>
  <li><strong>Continuous Deployment</strong>: every green build goes to production automatically.</li>
</ul>
<h3>Typical stages</h3>
<p>Checkout, build, unit tests, static analysis, package artifact, deploy to staging, integration tests, deploy to production.</p>"#,
);

pub const CONTAINERS_VS_VIRTUAL_MACHINES: TopicContent = TopicContent::new(
    "containers-vs-virtual-machines",
    "Containers vs Virtual Machines",
    r#"<table>
  <tr><th></th><th>Containers</th><th>Virtual machines</th></tr>
  <tr><td>Isolation</td><td>Namespaces and cgroups, shared kernel</td><td>Hypervisor, separate kernel</td></tr>
  <tr><td>Startup</td><td>Milliseconds to seconds</td><td>Seconds to minutes</td></tr>
  <tr><td>Size</td><td>Megabytes</td><td>Gigabytes</td></tr>
  <tr><td>Security boundary</td><td>Weaker</td><td>Stronger</td></tr>
</table>
<p>MicroVMs such as Firecracker blend both: VM isolation with container-like startup.</p>"#,
);

pub const INFRASTRUCTURE_AS_CODE: TopicContent = TopicContent::new(
    "infrastructure-as-code",
    "Infrastructure as Code",
    r#"<h3>Definition</h3>
<p>Infrastructure is described in versioned files and provisioned by tools rather than by hand.</p>
<ul>
  <li>Declarative: Terraform, CloudFormation, Pulumi (desired end state).</li>
  <li>Imperative / configuration: Ansible, Chef (steps to run).</li>
</ul>
<p>Benefits: repeatable environments, code review for infrastructure, drift detection and disaster recovery from source.</p>"#,
);

pub const BLUE_GREEN_DEPLOYMENT: TopicContent = TopicContent::new(
    "blue-green-deployment",
    "Blue-Green Deployment",
    r#"<h3>Release strategies</h3>
<table>
  <tr><th>Strategy</th><th>How</th><th>Rollback</th></tr>
  <tr><td>Blue-green</td><td>Run new version beside old, switch traffic at once</td><td>Switch back</td></tr>
  <tr><td>Canary</td><td>Send a small share of traffic to the new version, grow gradually</td><td>Route the share back</td></tr>
  <tr><td>Rolling</td><td>Replace instances in batches</td><td>Roll forward or redeploy</td></tr>
</table>
<p>Database schema changes must stay backward compatible across both versions (expand, migrate, contract).</p>"#,
);

pub const OBSERVABILITY: TopicContent = TopicContent::new(
    "observability",
    "Observability (Logs, Metrics, Traces)",
    r#"<h3>Three pillars</h3>
<ul>
  <li><strong>Logs</strong>: discrete, structured events with context.</li>
  <li><strong>Metrics</strong>: numeric time series, cheap to store and alert on (RED: rate, errors, duration; USE: utilization, saturation, errors).</li>
  <li><strong>Traces</strong>: the path of one request across services, made of spans.</li>
</ul>
<p>OpenTelemetry provides a vendor-neutral API and wire format for all three.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    CI_CD_PIPELINES,
    CONTAINERS_VS_VIRTUAL_MACHINES,
    INFRASTRUCTURE_AS_CODE,
    BLUE_GREEN_DEPLOYMENT,
    OBSERVABILITY,
];
