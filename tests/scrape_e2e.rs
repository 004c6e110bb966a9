use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use airline_reviews::config::Config;
use airline_reviews::models::{DetailValue, TripVerified};
use airline_reviews::scrapers::{AirlineQualitySource, PageSource, ReviewCollector};
use airline_reviews::storage::{read_csv, write_csv};

const BASE_PATH: &str = "/airline-reviews/british-airways";
const TEST_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/126.0";

const TWO_REVIEWS: &str = r#"<!DOCTYPE html>
<html><body>
<section class="layout-section">
  <article class="comp comp_media-review-rated list-item media position-content review-900001">
    <div class="rating-10"><span itemprop="ratingValue">9</span>/<span>10</span></div>
    <h2 class="text_header">"Crew were superb"</h2>
    <h3 class="text_sub_header userStatusWrapper">
      <span itemprop="author">R  Patel</span> (United Kingdom)
      <time itemprop="datePublished" datetime="2024-06-01">1st June 2024</time>
    </h3>
    <div class="text_content">✅ <strong>Trip Verified</strong> | Great service from London to Singapore.</div>
    <table class="review-ratings">
      <tr><td class="review-rating-header type_of_traveller">Type Of Traveller</td><td class="review-value">Couple Leisure</td></tr>
      <tr><td class="review-rating-header seat_comfort">Seat Comfort</td><td class="review-rating-stars stars"><span class="star fill">1</span><span class="star fill">2</span><span class="star fill">3</span><span class="star fill">4</span><span class="star">5</span></td></tr>
      <tr><td class="review-rating-header recommended">Recommended</td><td class="review-value rating-yes">yes</td></tr>
    </table>
  </article>
  <article class="comp comp_media-review-rated list-item media position-content review-900002">
    <div class="rating-10"><span itemprop="ratingValue">3</span>/<span>10</span></div>
    <h2 class="text_header">“Late again”</h2>
    <h3 class="text_sub_header userStatusWrapper">
      <span itemprop="author">M Jones</span> (Ireland)
      <time itemprop="datePublished">2nd June 2024</time>
    </h3>
    <div class="text_content">Not Verified | Two hour delay at Heathrow.</div>
    <table class="review-ratings">
      <tr><td class="review-rating-header">Wifi &amp; Connectivity</td><td class="review-rating-stars stars"><span class="star">1</span><span class="star">2</span><span class="star">3</span><span class="star">4</span><span class="star">5</span></td></tr>
    </table>
  </article>
</section>
</body></html>"#;

fn test_config(server: &MockServer) -> Arc<Config> {
    Arc::new(Config {
        base_url: format!("{}{}", server.uri(), BASE_PATH),
        user_agent: TEST_USER_AGENT.to_string(),
        delay_secs: 0,
        request_timeout_secs: Some(5),
        ..Config::default()
    })
}

async fn mount_page(server: &MockServer, page: u32, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}/page/{}/", BASE_PATH, page)))
        .and(query_param("sortby", "post_date:Desc"))
        .and(query_param("pagesize", "100"))
        .and(header("User-Agent", TEST_USER_AGENT))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_page_with_partial_review() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(200).set_body_string(TWO_REVIEWS)).await;

    let source = AirlineQualitySource::new(test_config(&server)).unwrap();
    let collector = ReviewCollector::new(Box::new(source), Duration::ZERO);
    let dataset = collector.scrape_all(1).await;

    assert_eq!(dataset.len(), 2);

    let first = &dataset[0];
    assert_eq!(first.date, "2024-06-01");
    assert_eq!(first.title, "Crew were superb");
    assert_eq!(first.author, "R Patel (United Kingdom) 1st June 2024");
    assert_eq!(first.rating.as_deref(), Some("9/10"));
    assert_eq!(first.trip_verified, TripVerified::Yes);
    assert_eq!(first.review, " Trip Verified | Great service from London to Singapore.");
    assert_eq!(first.details["Seat Comfort"], DetailValue::Stars(4));
    assert_eq!(first.details["Recommended"], DetailValue::Text("yes".to_string()));

    let second = &dataset[1];
    assert_eq!(second.date, "");
    assert_eq!(second.title, "Late again");
    assert_eq!(second.author, "M Jones (Ireland) 2nd June 2024");
    assert_eq!(second.rating.as_deref(), Some("3/10"));
    assert_eq!(second.trip_verified, TripVerified::No);
    assert_eq!(second.details["Wifi & Connectivity"], DetailValue::Stars(0));
}

#[tokio::test]
async fn error_status_still_returns_body() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>")).await;

    let source = AirlineQualitySource::new(test_config(&server)).unwrap();
    assert_eq!(source.fetch_page(1).await.unwrap(), "<html>Service Unavailable</html>");

    let collector = ReviewCollector::new(Box::new(source), Duration::ZERO);
    assert!(collector.parse_page(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn transport_failure_does_not_abort_run() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(200).set_body_string(TWO_REVIEWS)).await;
    mount_page(
        &server,
        2,
        ResponseTemplate::new(200)
            .set_body_string(TWO_REVIEWS)
            .set_delay(Duration::from_secs(30)),
    )
    .await;
    mount_page(&server, 3, ResponseTemplate::new(200).set_body_string(TWO_REVIEWS)).await;

    let config = Arc::new(Config {
        request_timeout_secs: Some(1),
        ..(*test_config(&server)).clone()
    });
    let source = AirlineQualitySource::new(config).unwrap();
    assert!(source.fetch_page(2).await.is_err());

    let collector = ReviewCollector::new(Box::new(source), Duration::ZERO);
    let dataset = collector.scrape_all(3).await;
    assert_eq!(dataset.len(), 4);
}

#[tokio::test]
async fn unreachable_host_yields_empty_dataset() {
    let config = Arc::new(Config {
        base_url: "http://127.0.0.1:9/airline-reviews/british-airways".to_string(),
        delay_secs: 0,
        request_timeout_secs: Some(5),
        ..Config::default()
    });
    let source = AirlineQualitySource::new(config).unwrap();
    let collector = ReviewCollector::new(Box::new(source), Duration::ZERO);

    assert!(collector.parse_page(1).await.is_err());
    assert!(collector.scrape_all(2).await.is_empty());
}

#[tokio::test]
async fn scraped_dataset_survives_csv_round_trip() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(200).set_body_string(TWO_REVIEWS)).await;

    let source = AirlineQualitySource::new(test_config(&server)).unwrap();
    let collector = ReviewCollector::new(Box::new(source), Duration::ZERO);
    let dataset = collector.scrape_all(1).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("british_airways_detailed_reviews.csv");
    write_csv(&dataset, &output).unwrap();

    let header = std::fs::read_to_string(&output).unwrap().lines().next().unwrap().to_string();
    assert_eq!(
        header,
        "Date,Author,Title,Rating,Trip Verified,Review,Type Of Traveller,Seat Comfort,Recommended,Wifi & Connectivity"
    );

    let rows = read_csv(&output).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Seat Comfort"], "4");
    assert_eq!(rows[0]["Type Of Traveller"], "Couple Leisure");
    assert!(!rows[0].contains_key("Wifi & Connectivity"));
    assert!(!rows[1].contains_key("Date"));
    assert_eq!(rows[1]["Wifi & Connectivity"], "0");
    assert_eq!(rows[1]["Trip Verified"], "No");
}
