use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SMALL: &str = r#"
syntax = "proto3";

message Ping {
  int64 sent_at = 1;
}
"#;

static SCHEMA: &str = r#"
syntax = "proto3";

package example.search.v1;

import "google/protobuf/timestamp.proto";

option java_multiple_files = true;
option (custom.meta) = { owner: "search" tags: ["a", "b"] };

// A search request.
message SearchRequest {
  string query = 1;
  int32 page_number = 2 [deprecated = true];
  optional int32 result_per_page = 3;
  repeated string tags = 4;
  map<string, Filter> filters = 5;
  oneof cursor {
    string token = 6;
    int64 offset = 7;
  }
  reserved 8, 10 to 20;
  reserved "legacy";

  message Filter {
    .google.protobuf.Timestamp since = 1;
  }
}

enum Corpus {
  option allow_alias = true;
  CORPUS_UNSPECIFIED = 0;
  CORPUS_WEB = 1 [(display) = "Web"];
}

service Search {
  rpc Query (SearchRequest) returns (stream SearchResponse);
  rpc Chat (stream SearchRequest) returns (stream SearchResponse) {
    option (http) = { post: "/v1/chat" body: "*" };
  }
}
"#;

static TEXT_FORMAT: &str = r#"
# Server configuration
name: "search"
replicas: 3
ports: [8080, 8081]
limits { cpu: 0.5 memory: "512Mi" }
[ext.Extra] < enabled: true >
"#;

fn benchmark_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser Benchmark");

    let repeated = SCHEMA.replace("syntax = \"proto3\";", "").repeat(16);
    let inputs = [("small", SMALL.to_owned()), ("schema", SCHEMA.to_owned()), ("x16", repeated)];
    for (name, text) in &inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("proto", name), text, |b, text| {
            b.iter(|| black_box(protolens_parse::parse(text)));
        });
    }

    group.throughput(Throughput::Bytes(TEXT_FORMAT.len() as u64));
    group.bench_with_input(BenchmarkId::new("text_format", "config"), TEXT_FORMAT, |b, text| {
        b.iter(|| black_box(protolens_textproto::parse(text)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
