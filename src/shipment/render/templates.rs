//! Template sources, registered under extension-less names so nothing is
//! HTML-escaped.

pub(super) const REPORT: &str = "report";
pub(super) const ORDERS: &str = "orders";
pub(super) const ORDERS_EMPTY: &str = "orders_empty";
pub(super) const DRIVERS: &str = "drivers";
pub(super) const DRIVERS_EMPTY: &str = "drivers_empty";
pub(super) const STATUS: &str = "status";
pub(super) const SEARCH: &str = "search";
pub(super) const SEARCH_EMPTY: &str = "search_empty";
pub(super) const START: &str = "start";
pub(super) const HELP: &str = "help";

pub(super) const ALL: [(&str, &str); 10] = [
    (REPORT, REPORT_SOURCE),
    (ORDERS, ORDERS_SOURCE),
    (ORDERS_EMPTY, "📭 No active orders"),
    (DRIVERS, DRIVERS_SOURCE),
    (DRIVERS_EMPTY, "📭 No drivers on the road"),
    (STATUS, STATUS_SOURCE),
    (SEARCH, SEARCH_SOURCE),
    (SEARCH_EMPTY, "🔍 '{{ term }}' not found"),
    (START, START_SOURCE),
    (HELP, HELP_SOURCE),
];

const REPORT_SOURCE: &str = "\
📊 *REPORT — {{ generated_at }}*

*Total:* {{ report.total_orders }} orders, {{ report.total_containers }} containers
*Active:* {{ report.active_count }}

*By status:*
{% for entry in report.per_status %}
{{ entry.glyph }} {{ entry.status }}: {{ entry.count }}
{% endfor %}";

const ORDERS_SOURCE: &str = "\
📋 *ACTIVE ORDERS:*

{% for order in orders %}
{{ order.glyph }} *{{ order.order_number }}*
👤 {{ order.client_name }}
🚛 {{ order.container_count }} cont. | {{ order.goods_type }}
📍 {{ order.status }}
{% if not loop.last %}

{% endif %}
{% endfor %}";

const DRIVERS_SOURCE: &str = "\
🚛 *DRIVERS ON THE ROAD:*

{% for driver in drivers %}
👤 *{{ driver.driver_name }}*
🏢 {{ driver.company }}
🚛 {{ driver.truck_number }} | {{ driver.container_number }}
📞 IR: {{ driver.iran_phone }}
📞 TKM: {{ driver.turkmenistan_phone }}
📦 Order: {{ driver.order_number }}
🎯 POD: {{ driver.delivery_date }}
{% if not loop.last %}

{% endif %}
{% endfor %}";

const STATUS_SOURCE: &str = "\
🗺 *STATUS BY LANE*

{% for section in lanes.sections %}
*{{ section.title }}:*
{% for entry in section.counts %}
{{ entry.glyph }} {{ entry.label }}: {{ entry.count }}
{% endfor %}

{% endfor %}
*Completed:* ✅ {{ lanes.completed }}";

const SEARCH_SOURCE: &str = "\
🔍 *RESULTS:* '{{ term }}'

{% for hit in hits %}
{{ hit.glyph }} *{{ hit.order_number }}*
👤 {{ hit.client_name }}
📍 {{ hit.status }}
🚛 {{ hit.container_count }} cont.
📝 {{ hit.notes }}
{% if not loop.last %}

{% endif %}
{% endfor %}";

const START_SOURCE: &str = "\
🚛 *Margiana Logistics Bot*

Available commands:
{% for command in commands %}
{{ command.usage }} - {{ command.description }}
{% endfor %}";

const HELP_SOURCE: &str = "\
*How to use:*

/report - current summary
/search ORD-001 - find an order
/drivers - drivers on the road

*Statuses:*
{% for entry in statuses %}
{{ entry.glyph }} {{ entry.status }} - {{ entry.label }}
{% endfor %}";
