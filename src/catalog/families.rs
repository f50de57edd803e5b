//! Built-in family table.
//!
//! Field names follow `sadf -p` output; column names are the sanitized
//! lower-case forms (`%` becomes `per_`, `/s` becomes `ps`).

use super::{DeviceGuard, FamilyDef, FieldDef};

/// Every supported activity, in classification order.
pub static BUILTIN_FAMILIES: &[FamilyDef] = &[
    FamilyDef {
        name: "cpu",
        device_dimension: Some("cpu_no"),
        fields: CPU_FIELDS,
    },
    FamilyDef {
        name: "pcsw",
        device_dimension: None,
        fields: PCSW_FIELDS,
    },
    FamilyDef {
        name: "irq",
        device_dimension: Some("irq_no"),
        fields: IRQ_FIELDS,
    },
    FamilyDef {
        name: "swap",
        device_dimension: None,
        fields: SWAP_FIELDS,
    },
    FamilyDef {
        name: "paging",
        device_dimension: None,
        fields: PAGING_FIELDS,
    },
    FamilyDef {
        name: "io",
        device_dimension: None,
        fields: IO_FIELDS,
    },
    FamilyDef {
        name: "memory",
        device_dimension: None,
        fields: MEMORY_FIELDS,
    },
    FamilyDef {
        name: "ktables",
        device_dimension: None,
        fields: KTABLES_FIELDS,
    },
    FamilyDef {
        name: "queue",
        device_dimension: None,
        fields: QUEUE_FIELDS,
    },
    FamilyDef {
        name: "serial",
        device_dimension: Some("tty_name"),
        fields: SERIAL_FIELDS,
    },
    FamilyDef {
        name: "disk",
        device_dimension: Some("dev"),
        fields: DISK_FIELDS,
    },
    FamilyDef {
        name: "net_dev",
        device_dimension: Some("iface_name"),
        fields: NET_DEV_FIELDS,
    },
    FamilyDef {
        name: "net_edev",
        device_dimension: None,
        fields: NET_EDEV_FIELDS,
    },
    FamilyDef {
        name: "net_nfs",
        device_dimension: None,
        fields: NET_NFS_FIELDS,
    },
    FamilyDef {
        name: "net_nfsd",
        device_dimension: None,
        fields: NET_NFSD_FIELDS,
    },
    FamilyDef {
        name: "net_sock",
        device_dimension: None,
        fields: NET_SOCK_FIELDS,
    },
    FamilyDef {
        name: "net_ip",
        device_dimension: None,
        fields: NET_IP_FIELDS,
    },
    FamilyDef {
        name: "net_eip",
        device_dimension: None,
        fields: NET_EIP_FIELDS,
    },
    FamilyDef {
        name: "net_icmp",
        device_dimension: None,
        fields: NET_ICMP_FIELDS,
    },
    FamilyDef {
        name: "net_eicmp",
        device_dimension: None,
        fields: NET_EICMP_FIELDS,
    },
    FamilyDef {
        name: "net_tcp",
        device_dimension: None,
        fields: NET_TCP_FIELDS,
    },
    FamilyDef {
        name: "net_etcp",
        device_dimension: None,
        fields: NET_ETCP_FIELDS,
    },
    FamilyDef {
        name: "net_udp",
        device_dimension: None,
        fields: NET_UDP_FIELDS,
    },
    FamilyDef {
        name: "net_sock6",
        device_dimension: None,
        fields: NET_SOCK6_FIELDS,
    },
    FamilyDef {
        name: "net_ip6",
        device_dimension: None,
        fields: NET_IP6_FIELDS,
    },
    FamilyDef {
        name: "net_eip6",
        device_dimension: None,
        fields: NET_EIP6_FIELDS,
    },
    FamilyDef {
        name: "net_icmp6",
        device_dimension: None,
        fields: NET_ICMP6_FIELDS,
    },
    FamilyDef {
        name: "net_eicmp6",
        device_dimension: None,
        fields: NET_EICMP6_FIELDS,
    },
    FamilyDef {
        name: "net_udp6",
        device_dimension: None,
        fields: NET_UDP6_FIELDS,
    },
    FamilyDef {
        name: "pwr_freq",
        device_dimension: Some("cpu_no"),
        fields: PWR_FREQ_FIELDS,
    },
    FamilyDef {
        name: "pwr_fan",
        device_dimension: Some("fan_no"),
        fields: PWR_FAN_FIELDS,
    },
    FamilyDef {
        name: "pwr_temp",
        device_dimension: Some("temp_no"),
        fields: PWR_TEMP_FIELDS,
    },
    FamilyDef {
        name: "pwr_in",
        device_dimension: Some("in_no"),
        fields: PWR_IN_FIELDS,
    },
    FamilyDef {
        name: "huge",
        device_dimension: None,
        fields: HUGE_FIELDS,
    },
    FamilyDef {
        name: "pwr_wghfreq",
        device_dimension: Some("cpu_no"),
        fields: PWR_WGHFREQ_FIELDS,
    },
    FamilyDef {
        name: "pwr_usb",
        device_dimension: Some("bus_no"),
        fields: PWR_USB_FIELDS,
    },
    FamilyDef {
        name: "filesystem",
        device_dimension: Some("mount"),
        fields: FILESYSTEM_FIELDS,
    },
    FamilyDef {
        name: "net_fc",
        device_dimension: Some("fchost"),
        fields: NET_FC_FIELDS,
    },
];

static CPU_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("%user", "per_user", 5, 2),
    FieldDef::decimal("%usr", "per_usr", 5, 2),
    FieldDef::decimal("%nice", "per_nice", 5, 2),
    FieldDef::decimal("%system", "per_system", 5, 2),
    FieldDef::decimal("%sys", "per_sys", 5, 2),
    FieldDef::decimal("%iowait", "per_iowait", 5, 2),
    FieldDef::decimal("%steal", "per_steal", 5, 2),
    FieldDef::decimal("%irq", "per_irq", 5, 2),
    FieldDef::decimal("%soft", "per_soft", 5, 2),
    FieldDef::decimal("%guest", "per_guest", 5, 2),
    FieldDef::decimal("%gnice", "per_gnice", 5, 2),
    FieldDef::decimal("%idle", "per_idle", 5, 2),
];

static PCSW_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("proc/s", "procps", 8, 2),
    FieldDef::decimal("cswch/s", "cswchps", 8, 2),
];

static IRQ_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("intr/s", "intrps", 8, 2),
];

static SWAP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("pswpin/s", "pswpinps", 8, 2),
    FieldDef::decimal("pswpout/s", "pswpoutps", 8, 2),
];

static PAGING_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("pgpgin/s", "pgpginps", 8, 2),
    FieldDef::decimal("pgpgout/s", "pgpgoutps", 8, 2),
    FieldDef::decimal("fault/s", "faultps", 8, 2),
    FieldDef::decimal("majflt/s", "majfltps", 8, 2),
    FieldDef::decimal("pgfree/s", "pgfreeps", 8, 2),
    FieldDef::decimal("pgscank/s", "pgscankps", 8, 2),
    FieldDef::decimal("pgscand/s", "pgscandps", 8, 2),
    FieldDef::decimal("pgsteal/s", "pgstealps", 8, 2),
    FieldDef::decimal("%vmeff", "per_vmeff", 8, 2),
];

static IO_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("tps", "tps", 8, 2).guarded(DeviceGuard::NoDevice),
    FieldDef::decimal("rtps", "rtps", 8, 2),
    FieldDef::decimal("wtps", "wtps", 8, 2),
    FieldDef::decimal("bread/s", "breadps", 8, 2),
    FieldDef::decimal("bwrtn/s", "bwrtnps", 8, 2),
];

static MEMORY_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("frmpg/s", "frmpgps", 8, 2),
    FieldDef::decimal("bufpg/s", "bufpgps", 8, 2),
    FieldDef::decimal("campg/s", "campgps", 8, 2),
    FieldDef::integer("kbmemfree", "kbmemfree"),
    FieldDef::integer("kbmemused", "kbmemused"),
    FieldDef::decimal("%memused", "per_memused", 5, 2),
    FieldDef::integer("kbbuffers", "kbbuffers"),
    FieldDef::integer("kbcached", "kbcached"),
    FieldDef::integer("kbcommit", "kbcommit"),
    FieldDef::decimal("%commit", "per_commit", 6, 2),
    FieldDef::integer("kbactive", "kbactive"),
    FieldDef::integer("kbinact", "kbinact"),
    FieldDef::integer("kbdirty", "kbdirty"),
    FieldDef::integer("kbswpfree", "kbswpfree"),
    FieldDef::integer("kbswpused", "kbswpused"),
    FieldDef::decimal("%swpused", "per_swpused", 5, 2),
    FieldDef::integer("kbswpcad", "kbswpcad"),
    FieldDef::decimal("%swpcad", "per_swpcad", 5, 2),
];

static KTABLES_FIELDS: &[FieldDef] = &[
    FieldDef::integer("dentunusd", "dentunusd"),
    FieldDef::integer("file-nr", "file_nr"),
    FieldDef::integer("inode-nr", "inode_nr"),
    FieldDef::integer("pty-nr", "pty_nr"),
];

static QUEUE_FIELDS: &[FieldDef] = &[
    FieldDef::integer("runq-sz", "runq_sz"),
    FieldDef::integer("plist-sz", "plist_sz"),
    FieldDef::decimal("ldavg-1", "ldavg_1", 8, 2),
    FieldDef::decimal("ldavg-5", "ldavg_5", 8, 2),
    FieldDef::decimal("ldavg-15", "ldavg_15", 8, 2),
    FieldDef::integer("blocked", "blocked"),
];

static SERIAL_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("rcvin/s", "rcvinps", 8, 2),
    FieldDef::decimal("xmtin/s", "xmtinps", 8, 2),
    FieldDef::decimal("framerr/s", "framerrps", 8, 2),
    FieldDef::decimal("prtyerr/s", "prtyerrps", 8, 2),
    FieldDef::decimal("brk/s", "brkps", 8, 2),
    FieldDef::decimal("ovrun/s", "ovrunps", 8, 2),
];

static DISK_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("tps", "tps", 8, 2).guarded(DeviceGuard::AnyDevice),
    FieldDef::decimal("rd_sec/s", "rd_secps", 8, 2),
    FieldDef::decimal("wr_sec/s", "wr_secps", 8, 2),
    FieldDef::decimal("avgrq-sz", "avgrq_sz", 8, 2),
    FieldDef::decimal("avgqu-sz", "avgqu_sz", 8, 2),
    FieldDef::decimal("await", "await", 8, 2),
    FieldDef::decimal("svctm", "svctm", 8, 2),
    FieldDef::decimal("%util", "per_util", 8, 2),
];

static NET_DEV_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("rxpck/s", "rxpckps", 8, 2),
    FieldDef::decimal("txpck/s", "txpckps", 8, 2),
    FieldDef::decimal("rxkB/s", "rxkbps", 8, 2),
    FieldDef::decimal("txkB/s", "txkbps", 8, 2),
    FieldDef::decimal("rxcmp/s", "rxcmpps", 8, 2),
    FieldDef::decimal("txcmp/s", "txcmpps", 8, 2),
    FieldDef::decimal("rxmcst/s", "rxmcstps", 8, 2),
    FieldDef::decimal("%ifutil", "per_ifutil", 8, 2),
];

static NET_EDEV_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("rxerr/s", "rxerrps", 8, 2),
    FieldDef::decimal("txerr/s", "txerrps", 8, 2),
    FieldDef::decimal("coll/s", "collps", 8, 2),
    FieldDef::decimal("rxdrop/s", "rxdropps", 8, 2),
    FieldDef::decimal("txdrop/s", "txdropps", 8, 2),
    FieldDef::decimal("txcarr/s", "txcarrps", 8, 2),
    FieldDef::decimal("rxfram/s", "rxframps", 8, 2),
    FieldDef::decimal("rxfifo/s", "rxfifops", 8, 2),
    FieldDef::decimal("txfifo/s", "txfifops", 8, 2),
];

static NET_NFS_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("call/s", "callps", 8, 2),
    FieldDef::decimal("retrans/s", "retransps", 8, 2),
    FieldDef::decimal("read/s", "readps", 8, 2),
    FieldDef::decimal("write/s", "writeps", 8, 2),
    FieldDef::decimal("access/s", "accessps", 8, 2),
    FieldDef::decimal("getatt/s", "getattps", 8, 2),
];

static NET_NFSD_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("scall/s", "scallps", 8, 2),
    FieldDef::decimal("badcall/s", "badcallps", 8, 2),
    FieldDef::decimal("packet/s", "packetps", 8, 2),
    FieldDef::decimal("udp/s", "udpps", 8, 2),
    FieldDef::decimal("tcp/s", "tcpps", 8, 2),
    FieldDef::decimal("hit/s", "hitps", 8, 2),
    FieldDef::decimal("miss/s", "missps", 8, 2),
    FieldDef::decimal("sread/s", "sreadps", 8, 2),
    FieldDef::decimal("swrite/s", "swriteps", 8, 2),
    FieldDef::decimal("saccess/s", "saccessps", 8, 2),
    FieldDef::decimal("sgetatt/s", "sgetattps", 8, 2),
];

static NET_SOCK_FIELDS: &[FieldDef] = &[
    FieldDef::integer("totsck", "totsck"),
    FieldDef::integer("tcpsck", "tcpsck"),
    FieldDef::integer("udpsck", "udpsck"),
    FieldDef::integer("rawsck", "rawsck"),
    FieldDef::integer("ip-frag", "ip_frag"),
    FieldDef::integer("tcp-tw", "tcp_tw"),
];

static NET_IP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("irec/s", "irecps", 8, 2),
    FieldDef::decimal("fwddgm/s", "fwddgmps", 8, 2),
    FieldDef::decimal("idel/s", "idelps", 8, 2),
    FieldDef::decimal("orq/s", "orqps", 8, 2),
    FieldDef::decimal("asmrq/s", "asmrqps", 8, 2),
    FieldDef::decimal("asmok/s", "asmokps", 8, 2),
    FieldDef::decimal("fragok/s", "fragokps", 8, 2),
    FieldDef::decimal("fragcrt/s", "fragcrtps", 8, 2),
];

static NET_EIP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("ihdrerr/s", "ihdrerrps", 8, 2),
    FieldDef::decimal("iadrerr/s", "iadrerrps", 8, 2),
    FieldDef::decimal("iukwnpr/s", "iukwnprps", 8, 2),
    FieldDef::decimal("idisc/s", "idiscps", 8, 2),
    FieldDef::decimal("odisc/s", "odiscps", 8, 2),
    FieldDef::decimal("onort/s", "onortps", 8, 2),
    FieldDef::decimal("asmf/s", "asmfps", 8, 2),
    FieldDef::decimal("fragf/s", "fragfps", 8, 2),
];

static NET_ICMP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("imsg/s", "imsgps", 8, 2),
    FieldDef::decimal("omsg/s", "omsgps", 8, 2),
    FieldDef::decimal("iech/s", "iechps", 8, 2),
    FieldDef::decimal("iechr/s", "iechrps", 8, 2),
    FieldDef::decimal("oech/s", "oechps", 8, 2),
    FieldDef::decimal("oechr/s", "oechrps", 8, 2),
    FieldDef::decimal("itm/s", "itmps", 8, 2),
    FieldDef::decimal("itmr/s", "itmrps", 8, 2),
    FieldDef::decimal("otm/s", "otmps", 8, 2),
    FieldDef::decimal("otmr/s", "otmrps", 8, 2),
    FieldDef::decimal("iadrmk/s", "iadrmkps", 8, 2),
    FieldDef::decimal("iadrmkr/s", "iadrmkrps", 8, 2),
    FieldDef::decimal("oadrmk/s", "oadrmkps", 8, 2),
    FieldDef::decimal("oadrmkr/s", "oadrmkrps", 8, 2),
];

static NET_EICMP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("ierr/s", "ierrps", 8, 2),
    FieldDef::decimal("oerr/s", "oerrps", 8, 2),
    FieldDef::decimal("idstunr/s", "idstunrps", 8, 2),
    FieldDef::decimal("odstunr/s", "odstunrps", 8, 2),
    FieldDef::decimal("itmex/s", "itmexps", 8, 2),
    FieldDef::decimal("otmex/s", "otmexps", 8, 2),
    FieldDef::decimal("iparmpb/s", "iparmpbps", 8, 2),
    FieldDef::decimal("oparmpb/s", "oparmpbps", 8, 2),
    FieldDef::decimal("isrcq/s", "isrcqps", 8, 2),
    FieldDef::decimal("osrcq/s", "osrcqps", 8, 2),
    FieldDef::decimal("iredir/s", "iredirps", 8, 2),
    FieldDef::decimal("oredir/s", "oredirps", 8, 2),
];

static NET_TCP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("active/s", "activeps", 8, 2),
    FieldDef::decimal("passive/s", "passiveps", 8, 2),
    FieldDef::decimal("iseg/s", "isegps", 8, 2),
    FieldDef::decimal("oseg/s", "osegps", 8, 2),
];

static NET_ETCP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("atmptf/s", "atmptfps", 8, 2),
    FieldDef::decimal("estres/s", "estresps", 8, 2),
    FieldDef::decimal("retrans/s", "retransps", 8, 2),
    FieldDef::decimal("isegerr/s", "isegerrps", 8, 2),
    FieldDef::decimal("orsts/s", "orstsps", 8, 2),
];

static NET_UDP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("idgm/s", "idgmps", 8, 2),
    FieldDef::decimal("odgm/s", "odgmps", 8, 2),
    FieldDef::decimal("noport/s", "noportps", 8, 2),
    FieldDef::decimal("idgmerr/s", "idgmerrps", 8, 2),
];

static NET_SOCK6_FIELDS: &[FieldDef] = &[
    FieldDef::integer("tcp6sck", "tcp6sck"),
    FieldDef::integer("udp6sck", "udp6sck"),
    FieldDef::integer("raw6sck", "raw6sck"),
    FieldDef::integer("ip6-frag", "ip6_frag"),
];

static NET_IP6_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("irec6/s", "irec6ps", 8, 2),
    FieldDef::decimal("fwddgm6/s", "fwddgm6ps", 8, 2),
    FieldDef::decimal("idel6/s", "idel6ps", 8, 2),
    FieldDef::decimal("orq6/s", "orq6ps", 8, 2),
    FieldDef::decimal("asmrq6/s", "asmrq6ps", 8, 2),
    FieldDef::decimal("asmok6/s", "asmok6ps", 8, 2),
    FieldDef::decimal("imcpck6/s", "imcpck6ps", 8, 2),
    FieldDef::decimal("omcpck6/s", "omcpck6ps", 8, 2),
    FieldDef::decimal("fragok6/s", "fragok6ps", 8, 2),
    FieldDef::decimal("fragcr6/s", "fragcr6ps", 8, 2),
];

static NET_EIP6_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("ihdrer6/s", "idrer6ps", 8, 2),
    FieldDef::decimal("iadrer6/s", "iadrer6ps", 8, 2),
    FieldDef::decimal("iukwnp6/s", "iukwnp6ps", 8, 2),
    FieldDef::decimal("i2big6/s", "i2big6ps", 8, 2),
    FieldDef::decimal("idisc6/s", "idisc6ps", 8, 2),
    FieldDef::decimal("odisc6/s", "odisc6ps", 8, 2),
    FieldDef::decimal("inort6/s", "inort6ps", 8, 2),
    FieldDef::decimal("onort6/s", "onort6ps", 8, 2),
    FieldDef::decimal("asmf6/s", "asmf6ps", 8, 2),
    FieldDef::decimal("fragf6/s", "fragf6ps", 8, 2),
    FieldDef::decimal("itrpck6/s", "itrpck6ps", 8, 2),
];

static NET_ICMP6_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("imsg6/s", "imsg6ps", 8, 2),
    FieldDef::decimal("omsg6/s", "omsg6ps", 8, 2),
    FieldDef::decimal("iech6/s", "iech6ps", 8, 2),
    FieldDef::decimal("iechr6/s", "iechr6ps", 8, 2),
    FieldDef::decimal("oechr6/s", "oechr6ps", 8, 2),
    FieldDef::decimal("igmbq6/s", "igmbq6ps", 8, 2),
    FieldDef::decimal("igmbr6/s", "igmbr6ps", 8, 2),
    FieldDef::decimal("ogmbr6/s", "ogmbr6ps", 8, 2),
    FieldDef::decimal("igmbrd6/s", "igmbrd6ps", 8, 2),
    FieldDef::decimal("ogmbrd6/s", "ogmbrd6ps", 8, 2),
    FieldDef::decimal("irtsol6/s", "irtsol6ps", 8, 2),
    FieldDef::decimal("ortsol6/s", "ortsol6ps", 8, 2),
    FieldDef::decimal("irtad6/s", "irtad6ps", 8, 2),
    FieldDef::decimal("inbsol6/s", "inbsol6ps", 8, 2),
    FieldDef::decimal("onbsol6/s", "onbsol6ps", 8, 2),
    FieldDef::decimal("inbad6/s", "inbad6ps", 8, 2),
    FieldDef::decimal("onbad6/s", "onbad6ps", 8, 2),
];

static NET_EICMP6_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("ierr6/s", "ierr6ps", 8, 2),
    FieldDef::decimal("idtunr6/s", "idtunr6ps", 8, 2),
    FieldDef::decimal("odtunr6/s", "odtunr6ps", 8, 2),
    FieldDef::decimal("itmex6/s", "itmex6ps", 8, 2),
    FieldDef::decimal("otmex6/s", "otmex6ps", 8, 2),
    FieldDef::decimal("iprmpb6/s", "iprmpb6ps", 8, 2),
    FieldDef::decimal("oprmpb6/s", "oprmpb6ps", 8, 2),
    FieldDef::decimal("iredir6/s", "iredir6ps", 8, 2),
    FieldDef::decimal("oredir6/s", "oredir6ps", 8, 2),
    FieldDef::decimal("ipck2b6/s", "ipck2b6ps", 8, 2),
    FieldDef::decimal("opck2b6/s", "opck2b6ps", 8, 2),
];

static NET_UDP6_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("idgm6/s", "idgm6ps", 8, 2),
    FieldDef::decimal("odgm6/s", "odgm6ps", 8, 2),
    FieldDef::decimal("noport6/s", "noport6ps", 8, 2),
    FieldDef::decimal("idgmer6/s", "idgmer6ps", 8, 2),
];

static PWR_FREQ_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("MHz", "mhz", 8, 2),
];

static PWR_FAN_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("rpm", "rpm", 8, 2),
    FieldDef::decimal("drpm", "drpm", 8, 2),
    FieldDef::text("DEVICE", "device").guarded(DeviceGuard::Pattern("fan")),
];

static PWR_TEMP_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("degC", "degc", 8, 2),
    FieldDef::decimal("%temp", "per_temp", 8, 2),
    FieldDef::text("DEVICE", "device").guarded(DeviceGuard::Pattern("temp")),
];

static PWR_IN_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("inV", "inv", 8, 2),
    FieldDef::decimal("%in", "per_in", 8, 2),
    FieldDef::text("DEVICE", "device").guarded(DeviceGuard::Pattern("in")),
];

static HUGE_FIELDS: &[FieldDef] = &[
    FieldDef::integer("kbhugfree", "kbhugfree"),
    FieldDef::integer("kbhugused", "kbhugused"),
    FieldDef::decimal("%hugused", "per_hugused", 5, 2),
];

static PWR_WGHFREQ_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("wghMHz", "wghmhz", 8, 2),
];

static PWR_USB_FIELDS: &[FieldDef] = &[
    FieldDef::text("idvendor", "idvendor"),
    FieldDef::text("idprod", "idprod"),
    FieldDef::integer("maxpower", "maxpower"),
    FieldDef::text("manufact", "manufact"),
    FieldDef::text("product", "product"),
];

static FILESYSTEM_FIELDS: &[FieldDef] = &[
    FieldDef::integer("MBfsfree", "mbfsfree"),
    FieldDef::integer("MBfsused", "mbfsused"),
    FieldDef::decimal("%fsused", "per_fsused", 5, 2),
    FieldDef::decimal("%ufsused", "per_ufsused", 5, 2),
    FieldDef::integer("Ifree", "ifree"),
    FieldDef::integer("Iused", "iused"),
    FieldDef::decimal("%Iused", "per_iused", 5, 2),
];

static NET_FC_FIELDS: &[FieldDef] = &[
    FieldDef::decimal("fch_rxf/s", "fch_rxfps", 8, 2),
    FieldDef::decimal("fch_txf/s", "fch_txfps", 8, 2),
    FieldDef::decimal("fch_rwx/s", "fch_rwxps", 8, 2),
    FieldDef::decimal("fch_txw/s", "fch_twxps", 8, 2),
];
