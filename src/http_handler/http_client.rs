/// A thin wrapper around `reqwest::Client` bound to one FlytOS instance.
///
/// FlytOS exposes every vehicle service below `/ros/<namespace>`, so the client
/// keeps both the base URL and the namespace and assembles full endpoint URLs
/// for the request types.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL of the FlytOS web server (e.g. `"http://localhost:80"`).
    base_url: String,
    /// Vehicle namespace inserted after `/ros`.
    namespace: String,
}

impl HTTPClient {
    /// Request timeout applied to every call.
    const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    /// Constructs a new `HTTPClient` for the given base URL and namespace.
    ///
    /// # Arguments
    /// * `base_url` – The root URL of the FlytOS web server.
    /// * `namespace` – The vehicle namespace used for all namespaced endpoints.
    ///
    /// # Returns
    /// A configured `HTTPClient` or the builder error from `reqwest`.
    pub(crate) fn new(base_url: &str, namespace: &str) -> Result<HTTPClient, reqwest::Error> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(Self::TIMEOUT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace: namespace.to_string(),
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }

    /// Returns the base URL the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Returns the currently used vehicle namespace.
    pub(crate) fn namespace(&self) -> &str { self.namespace.as_str() }

    /// Replaces the vehicle namespace, e.g. after it was discovered from the server.
    pub(crate) fn set_namespace(&mut self, namespace: &str) {
        self.namespace = namespace.to_string();
    }

    /// Builds the full URL for an endpoint path.
    ///
    /// Namespaced endpoints resolve to `<base>/ros/<namespace><endpoint>`,
    /// global ones to `<base>/ros<endpoint>`.
    pub(crate) fn endpoint_url(&self, endpoint: &str, namespaced: bool) -> String {
        if namespaced {
            format!("{}/ros/{}{endpoint}", self.base_url, self.namespace)
        } else {
            format!("{}/ros{endpoint}", self.base_url)
        }
    }
}
