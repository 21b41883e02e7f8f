// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default listen address for the web frontend
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// ClusterRole granted to every service account in a team namespace
pub const PLAYER_CLUSTER_ROLE: &str = "pleesah-player";

/// Lifetime of issued team tokens in seconds (24 hours)
pub const TOKEN_TTL_SECONDS: i64 = 86400;

/// Connection details of the cluster that rendered kubeconfigs point at
pub mod cluster {
    pub const SERVER: &str = "https://34.51.167.42";
    pub const NAME: &str = "gke_leesah-quiz-dev-5cf6_europe-north2_pleesah";
    pub const CONTEXT: &str = "pleesah";
    /// Base64-encoded CA certificate of the cluster endpoint
    pub const CA_DATA: &str = "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0tCk1JSUVMRENDQXBTZ0F3SUJBZ0lRZkkzYzRQQ0tPc3ZhSkNhazRYUXRuekFOQmdrcWhraUc5dzBCQVFzRkFEQXYKTVMwd0t3WURWUVFERXlSa05UY3lZVGhpWXkxa1pUVXdMVFEyWmprdE9EWTROaTAxTnpka1ltTTFPR1JsWXpndwpJQmNOTWpZd01URXpNVEV4TkRNNFdoZ1BNakExTmpBeE1EWXhNakUwTXpoYU1DOHhMVEFyQmdOVkJBTVRKR1ExCk56SmhPR0pqTFdSbE5UQXRORFptT1MwNE5qZzJMVFUzTjJSaVl6VTRaR1ZqT0RDQ0FhSXdEUVlKS29aSWh2Y04KQVFFQkJRQURnZ0dQQURDQ0FZb0NnZ0dCQUp2TEJqbkxVdEttcEtWOTR3cGxlYXhUbkpYZmdxVHY4MmoyK0VpbwpuUEpibFpKdGdxbmJPSTlNaTFVRzQ1YmNCaFNudzFSeFdKSnVyNUUvbzUyNHRVamlWTlBXb1dDYlFpVE9mblNlCnhsdzRMbjFhd3dGVTYzRlNIajNMMGx1M0xhbnBiWWt3NU1NdlE0a2l4NkQvaWtJQmNUS1kzOXJ5TDdrMmVXbUIKK1pNNHFLWElzUDFXM0d4cGpndkgybGRtVE1DMWwwMVhERC9YNmdWK1hBVGRid2NHTFJrb1h4c2VOaDRWam1xSgpqUGF1T0VQeTRvTUtzSjVWbTZZQWxtcGlOLzBTUFdMUDFPZFpub1k0MWlwQlNCQllPRHAwRUNJSDVidWtaNi9hClhZaEpEU0ltemlCUENNNGNObVNaRFlvTHlRUlBuM1cwWFo5UHJId1BUTGtNaE1YdXRNeWJJVTlvcWdvNXpxTTUKWFJzVnJPQ1BLZDdhV0d3UXNoemN4MFc0Z3FpeHcrc1JHYVIyTm94YVcycFhEOWRtQXFVQ0N0YlFOMk01eXppbworRUlGY0VYZmNGRlJJSndFSzRmbXA3bzNIUnhUL3hpNXlPSWgyTDFpVGc5RW9vTnE2OHp6M1pUM2JkZUpuZzRGCnhGUzd5d0tGQkNXa3grZG1lc2s3WWVHOWNRSURBUUFCbzBJd1FEQU9CZ05WSFE4QkFmOEVCQU1DQWdRd0R3WUQKVlIwVEFRSC9CQVV3QXdFQi96QWRCZ05WSFE0RUZnUVU0WW1HZUpVYWhBcFIyV0t3b0dBbFNBcFNnMm93RFFZSgpLb1pJaHZjTkFRRUxCUUFEZ2dHQkFKRCtpZnFLL3dHRXRNMzM4dmJxSUx3WFBwcVRuNm0yTHhDU2owbVhDdXNHCmh4RjJnNnlsMW5EaU5DREVTcmY5a3NVSFFmczNBWng4cE95ak0vMjBPRzZEcllScmt5WVErTEVHem95bUtnd24KSkl4eUhIcGNmZHpHYzI3dXFnSEJ2VzdzQ04vWnFBcjZYUXMwdjhsdXdxd2pibG9TL1VKS3pCN1JOeHArbGVhYQpXSGoxVVFJYnNZZGREUWJFRlBEbk43djBVbVZzT0c2Ukhvd1JyQTRMSldsQmI5OTdweTRzQ0syOFBjR1BlYUEwCmd0UmpDeWN6RmtJR3ppcEE4Mjhab2p1R0VVck9zMnlxK3RYOWFQVGl3Q1E2NTBuS0o5eTVuc05IV09KYksyenMKeGxvbHJzY1ZIQ2ZOZVltZjFqVjR5aWVHK1I5TlYrNXVjWUxZdzdVOW9TZjhPWUFRdEFYNGYwdEJPQzYyZ1lFRgoxRmVsQmxobXlGOWNXcWtTYVFhK1k3RG52RXJFVmdTd01mSmd0WDkvRHpvcWh2VjdtME16R0VnZ1ppam1KV2xJCmZvN01aaVpwSUNOZHRmVmx1WW54N2VJbFFSaDAycVl5MWl1SUV3MnhabFZDTllZdWVodnUwaEs0b2MrdHZib1UKNWRBU2NqLzJkM3lMT0s5WVEzV21TZz09Ci0tLS0tRU5EIENFUlRJRklDQVRFLS0tLS0K";
}

/// Informational secret dropped into every team namespace
pub mod coordinates {
    pub const SECRET_NAME: &str = "koordinatene-mine";
    pub const KEY: &str = "KOORDINATER";
    pub const VALUE: &str = "59.9124° N, 10.7962° E";
}
